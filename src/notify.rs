//! Telegram Bot API notifications.

use tracing::debug;
use ureq::Agent;

use crate::config::TelegramConfig;
use crate::error::{Error, Result};
use crate::http::USER_AGENT;
use crate::models::Percentage;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

pub fn format_usage_message(usage: Percentage) -> String {
    format!("Current swimming pool usage is {}%", usage.value())
}

/// `sendMessage` endpoint for a bot. Contains the token; never log it.
fn send_message_url(api_base: &str, bot_token: &str) -> String {
    format!(
        "{}/bot{}/sendMessage",
        api_base.trim_end_matches('/'),
        bot_token
    )
}

/// POST `text` to the configured chat as a URL-encoded form.
///
/// Any non-2xx status is a delivery failure carrying the response body.
pub fn send_message(agent: &Agent, telegram: &TelegramConfig, text: &str) -> Result<()> {
    let url = send_message_url(&telegram.api_base, &telegram.bot_token);
    let mut response = agent
        .post(url.as_str())
        .header("User-Agent", USER_AGENT)
        .send_form([("chat_id", telegram.chat_id.as_str()), ("text", text)])
        .map_err(|e| Error::Notify {
            status: None,
            message: e.to_string(),
        })?;

    let status = response.status();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| Error::Notify {
            status: Some(status.as_u16()),
            message: format!("failed to read response: {e}"),
        })?;

    if !status.is_success() {
        return Err(Error::Notify {
            status: Some(status.as_u16()),
            message: format!(
                "telegram API responded with status {}: {}",
                status.as_u16(),
                body
            ),
        });
    }

    debug!(status = status.as_u16(), chat_id = %telegram.chat_id, "telegram accepted message");
    Ok(())
}
