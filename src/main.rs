use anyhow::Result;
use tracing::{error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pool_usage::cli::Args;
use pool_usage::config::Config;
use pool_usage::display::{print_json_output, print_text_output};
use pool_usage::{logging, pipeline};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.debug);

    // Fatal only here: nothing runs without a valid configuration
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let (report, mut storage) = pipeline::run(&config);

    let history = match (args.history, storage.as_mut()) {
        (Some(limit), Some(storage)) => match storage.recent_readings(limit) {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!(error = %e, "Error reading history");
                None
            }
        },
        (Some(_), None) => {
            warn!("storage unavailable, history not shown");
            None
        }
        (None, _) => None,
    };

    if args.json {
        print_json_output(&report, config.notifications_enabled(), history.as_deref())?;
    } else {
        print_text_output(&report, config.notifications_enabled(), history.as_deref());
    }
    Ok(())
}

fn setup_logging(debug: bool) {
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::registry()
        .with(logging::env_filter(debug, directives.as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
