use crate::notify::DEFAULT_API_BASE;
use crate::scrape::DEFAULT_SOURCE_URL;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Record the current swimming pool occupancy")]
pub struct Args {
    /// Storage connection string: SQLite path, sqlite:// URL or :memory:
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Telegram bot token used for notifications
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub telegram_bot_token: Option<String>,

    /// Telegram chat or channel id that receives the message
    #[arg(long, env = "TELEGRAM_CHAT_ID", allow_hyphen_values = true)]
    pub telegram_chat_id: Option<String>,

    /// Skip the Telegram stage (token and chat id become optional)
    #[arg(long, env = "POOL_USAGE_NO_NOTIFY")]
    pub no_notify: bool,

    /// Page that publishes the occupancy figure
    #[arg(long, env = "POOL_USAGE_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Base URL of the Telegram Bot API
    #[arg(long, env = "TELEGRAM_API_BASE", default_value = DEFAULT_API_BASE)]
    pub telegram_api_base: String,

    /// Emit the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// After the run, list this many of the most recent stored readings
    #[arg(long, value_name = "N")]
    pub history: Option<usize>,

    /// Debug mode: verbose stage logging
    #[arg(long, env = "POOL_USAGE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
