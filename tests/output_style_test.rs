use pool_usage::display::{format_history, format_report};
use pool_usage::models::{Percentage, UsageReading};
use pool_usage::pipeline::RunReport;
use serial_test::serial;

fn no_color() {
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

#[test]
#[serial]
fn plain_summary_for_full_run() {
    no_color();
    let report = RunReport {
        reading: Percentage::new(42),
        saved_id: Some(1),
        notified: true,
        errors: Vec::new(),
    };
    assert_eq!(
        format_report(&report, true),
        "pool usage 42% · saved ok · telegram ok"
    );
}

#[test]
#[serial]
fn silent_variant_omits_telegram_segment() {
    no_color();
    let report = RunReport {
        reading: Percentage::new(9),
        saved_id: None,
        notified: false,
        errors: vec!["record: boom".into()],
    };
    assert_eq!(format_report(&report, false), "pool usage 9% · saved failed");
}

#[test]
#[serial]
fn failed_fetch_summary() {
    no_color();
    let report = RunReport::default();
    assert_eq!(format_report(&report, true), "pool usage unavailable failed");
}

#[test]
#[serial]
fn history_lines_end_with_percentage() {
    no_color();
    let rows = vec![UsageReading {
        id: 1,
        timestamp: chrono::Utc::now(),
        percentage: Percentage::new(77).unwrap(),
    }];
    let lines = format_history(&rows);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("  77%"), "{}", lines[0]);
}
