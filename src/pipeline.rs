//! Runs the stages of a single invocation in order:
//! storage init, fetch, record, notify.
//!
//! A failing stage is logged and skipped; later stages still run when they
//! have what they need. Nothing is retried and nothing is rolled back.

use serde::Serialize;
use tracing::{error, info, warn};
use ureq::Agent;

use crate::config::Config;
use crate::db::Storage;
use crate::error::Result;
use crate::http;
use crate::models::Percentage;
use crate::notify;
use crate::scrape;

/// Outcome of one run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    /// Percentage extracted from the page, if the fetch stage succeeded
    pub reading: Option<Percentage>,
    /// Row id of the stored reading
    pub saved_id: Option<i64>,
    pub notified: bool,
    /// One line per failed stage, in stage order
    pub errors: Vec<String>,
}

impl RunReport {
    fn fail(&mut self, stage: &str, err: &crate::Error) {
        self.errors.push(format!("{stage}: {err}"));
    }
}

/// Open the store and make sure the table exists.
pub fn prepare_storage(database_url: &str) -> Result<Storage> {
    let mut storage = Storage::open(database_url)?;
    storage.init_schema()?;
    Ok(storage)
}

/// Run every stage with a fresh HTTP agent and storage connection.
///
/// The connection is handed back so follow-up reads (`--history`) use the
/// same store the reading was written to.
pub fn run(config: &Config) -> (RunReport, Option<Storage>) {
    let agent = http::agent();
    let mut report = RunReport::default();

    let mut storage = match prepare_storage(&config.database_url) {
        Ok(storage) => Some(storage),
        Err(e) => {
            error!(error = %e, "Error initializing the database");
            report.fail("storage", &e);
            None
        }
    };

    let report = run_stages(config, &agent, storage.as_mut(), report);
    (report, storage)
}

/// Fetch, record and notify using an already prepared connection.
///
/// `storage` is `None` when it could not be initialized; recording is then skipped.
pub fn run_stages(
    config: &Config,
    agent: &Agent,
    storage: Option<&mut Storage>,
    mut report: RunReport,
) -> RunReport {
    let usage = match scrape::fetch_pool_usage(agent, &config.source_url) {
        Ok(usage) => usage,
        Err(e) => {
            error!(error = %e, "Error fetching pool usage");
            report.fail("fetch", &e);
            return report;
        }
    };
    info!("Current swimming pool usage: {usage}");
    report.reading = Some(usage);

    match storage {
        Some(storage) => match storage.record_usage(usage) {
            Ok(id) => {
                info!(id, "Data successfully saved to the database.");
                report.saved_id = Some(id);
            }
            Err(e) => {
                error!(error = %e, "Error saving to database");
                report.fail("record", &e);
            }
        },
        None => warn!("storage unavailable, reading not saved"),
    }

    if let Some(telegram) = &config.telegram {
        let message = notify::format_usage_message(usage);
        match notify::send_message(agent, telegram, &message) {
            Ok(()) => {
                info!("Message successfully sent to Telegram.");
                report.notified = true;
            }
            Err(e) => {
                error!(error = %e, "Error sending message to Telegram");
                report.fail("notify", &e);
            }
        }
    }

    report
}
