//! Log filter construction for the binary.

use tracing_subscriber::EnvFilter;

/// ureq logs request URIs at debug level, and the Telegram URI carries the
/// bot token. Keep it at warn whatever the user asks for.
const QUIET_HTTP: &str = "ureq=warn";

/// Build the filter: `RUST_LOG`-style directives win over the `--debug` switch.
pub fn env_filter(debug: bool, directives: Option<&str>) -> EnvFilter {
    let base = match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => EnvFilter::new(d),
        None if debug => EnvFilter::new("pool_usage=debug"),
        None => EnvFilter::new("pool_usage=info"),
    };
    base.add_directive(QUIET_HTTP.parse().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels() {
        assert!(env_filter(false, None).to_string().contains("pool_usage=info"));
        assert!(env_filter(true, Some("  ")).to_string().contains("pool_usage=debug"));
    }

    #[test]
    fn http_client_stays_quiet_even_with_global_debug() {
        let filter = env_filter(false, Some("debug")).to_string();
        assert!(filter.contains("ureq=warn"), "{filter}");

        let filter = env_filter(true, Some("ureq=trace,pool_usage=debug")).to_string();
        assert!(filter.contains("ureq=warn"), "{filter}");
        assert!(!filter.contains("ureq=trace"), "{filter}");
    }
}
