#![allow(dead_code)]

use pool_usage::config::{Config, TelegramConfig};

pub const BOT_TOKEN: &str = "TESTTOKEN";
pub const CHAT_ID: &str = "-10042";

pub fn should_skip_httpmock() -> bool {
    if can_bind_localhost() {
        return false;
    }
    eprintln!("skipping httpmock test: sandbox forbids binding to localhost");
    true
}

fn can_bind_localhost() -> bool {
    match std::net::TcpListener::bind(("127.0.0.1", 0)) {
        Ok(listener) => {
            drop(listener);
            true
        }
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => false,
        Err(err) => panic!("failed to bind localhost for httpmock tests: {err}"),
    }
}

pub fn pool_page(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><p class="uzimtumas">Šiuo metu esantis Lazdynų baseino ir sporto klubo užimtumas: {fragment}</p></body></html>"#
    )
}

pub fn telegram(api_base: String) -> TelegramConfig {
    TelegramConfig {
        api_base,
        bot_token: BOT_TOKEN.to_string(),
        chat_id: CHAT_ID.to_string(),
    }
}

pub fn config(database_url: String, source_url: String, telegram: Option<TelegramConfig>) -> Config {
    Config {
        database_url,
        source_url,
        telegram,
    }
}
