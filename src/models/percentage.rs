use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Occupancy percentage, always within `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Percentage(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Percentage::new(value)
            .ok_or_else(|| Error::Parse(format!("{value} is outside 0..=100")))
    }
}

impl TryFrom<i64> for Percentage {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Percentage::new)
            .ok_or_else(|| Error::Parse(format!("{value} is outside 0..=100")))
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> u8 {
        p.0
    }
}

impl FromStr for Percentage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|e| Error::Parse(format!("error converting percentage `{s}`: {e}")))?;
        u8::try_from(value)
            .ok()
            .and_then(Percentage::new)
            .ok_or_else(|| Error::Parse(format!("{value} is outside 0..=100")))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
