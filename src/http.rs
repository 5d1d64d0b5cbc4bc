use ureq::Agent;

pub const USER_AGENT: &str = concat!("pool-usage/", env!("CARGO_PKG_VERSION"));

/// Build the blocking agent shared by the fetch and notify stages.
///
/// Status codes are returned to the caller instead of being turned into
/// errors, so each stage decides what a non-success response means.
pub fn agent() -> Agent {
    let config = Agent::config_builder()
        .http_status_as_error(false)
        .build();
    Agent::new_with_config(config)
}
