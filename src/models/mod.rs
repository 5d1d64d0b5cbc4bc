pub mod percentage;
pub mod reading;

pub use percentage::Percentage;
pub use reading::UsageReading;
