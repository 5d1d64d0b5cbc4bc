//! Validation of command-line and environment settings into a [`Config`].
//!
//! Validation happens once, before any stage runs. Empty or whitespace-only
//! values are treated as absent.

use std::fmt;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Credentials and endpoint for the Telegram stage.
#[derive(Clone)]
pub struct TelegramConfig {
    pub api_base: String,
    pub bot_token: String,
    pub chat_id: String,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_base", &self.api_base)
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub source_url: String,
    /// `None` when notifications are disabled
    pub telegram: Option<TelegramConfig>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let database_url = non_empty(args.database_url.as_deref());
        let mut missing = Vec::new();
        if database_url.is_none() {
            missing.push("DATABASE_URL");
        }

        let telegram = if args.no_notify {
            None
        } else {
            let bot_token = non_empty(args.telegram_bot_token.as_deref());
            let chat_id = non_empty(args.telegram_chat_id.as_deref());
            if bot_token.is_none() {
                missing.push("TELEGRAM_BOT_TOKEN");
            }
            if chat_id.is_none() {
                missing.push("TELEGRAM_CHAT_ID");
            }
            bot_token.zip(chat_id).map(|(bot_token, chat_id)| TelegramConfig {
                api_base: args.telegram_api_base.trim().to_string(),
                bot_token,
                chat_id,
            })
        };

        match database_url {
            Some(database_url) if missing.is_empty() => Ok(Config {
                database_url,
                source_url: args.source_url.trim().to_string(),
                telegram,
            }),
            _ => Err(Error::Config { missing }),
        }
    }

    pub fn notifications_enabled(&self) -> bool {
        self.telegram.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["pool_usage"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn notifying_variant_requires_all_credentials() {
        let a = args(&["--database-url", "usage.db"]);
        match Config::from_args(&a) {
            Err(Error::Config { missing }) => {
                assert_eq!(missing, vec!["TELEGRAM_BOT_TOKEN", "TELEGRAM_CHAT_ID"])
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn blank_values_count_as_missing() {
        let a = args(&[
            "--database-url",
            "  ",
            "--telegram-bot-token",
            "t",
            "--telegram-chat-id",
            "",
        ]);
        match Config::from_args(&a) {
            Err(Error::Config { missing }) => {
                assert_eq!(missing, vec!["DATABASE_URL", "TELEGRAM_CHAT_ID"])
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn no_notify_only_needs_storage() {
        let a = args(&["--database-url", "usage.db", "--no-notify"]);
        let cfg = Config::from_args(&a).unwrap();
        assert!(!cfg.notifications_enabled());
        assert_eq!(cfg.database_url, "usage.db");
        assert_eq!(cfg.source_url, crate::scrape::DEFAULT_SOURCE_URL);
    }

    #[test]
    fn debug_output_redacts_token() {
        let a = args(&[
            "--database-url",
            "usage.db",
            "--telegram-bot-token",
            "123:secret",
            "--telegram-chat-id",
            "-10042",
        ]);
        let cfg = Config::from_args(&a).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("123:secret"));
        assert!(dbg.contains("-10042"));
    }
}
