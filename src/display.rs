use chrono::Local;
use std::env;

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
pub mod color_shim {
    use std::fmt::{self, Display, Formatter};

    #[derive(Clone)]
    pub struct Plain(pub String);

    impl Display for Plain {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bright_black(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn red(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn yellow(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn green(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn cyan(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn bold(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
        fn dimmed(&self) -> Plain {
            Plain(self.as_str().to_string())
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            self.as_str()
        }
    }
    impl ColorizeShim for Plain {
        fn as_str(&self) -> &str {
            &self.0
        }
    }
}

#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::models::{Percentage, UsageReading};
use crate::pipeline::RunReport;

fn colors_enabled() -> bool {
    env::var("NO_COLOR").is_err()
}

fn colorize_usage(usage: Percentage) -> String {
    let text = usage.to_string();
    if !colors_enabled() {
        return text;
    }
    match usage.value() {
        80.. => text.red().bold().to_string(),
        50..=79 => text.yellow().bold().to_string(),
        _ => text.green().to_string(),
    }
}

fn mark(ok: bool) -> String {
    let (sym, plain) = if ok { ("✓", "ok") } else { ("✗", "failed") };
    if !colors_enabled() {
        return plain.to_string();
    }
    if ok {
        sym.green().to_string()
    } else {
        sym.red().to_string()
    }
}

/// One-line human summary of a run.
pub fn format_report(report: &RunReport, notifications_enabled: bool) -> String {
    let Some(usage) = report.reading else {
        return format!("pool usage unavailable {}", mark(false));
    };
    let mut line = format!(
        "pool usage {} · saved {}",
        colorize_usage(usage),
        mark(report.saved_id.is_some())
    );
    if notifications_enabled {
        line.push_str(&format!(" · telegram {}", mark(report.notified)));
    }
    line
}

pub fn format_history(readings: &[UsageReading]) -> Vec<String> {
    readings
        .iter()
        .map(|r| {
            let when = r
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string();
            let when = if colors_enabled() {
                when.dimmed().to_string()
            } else {
                when
            };
            format!("{when}  {}", colorize_usage(r.percentage))
        })
        .collect()
}

pub fn print_text_output(
    report: &RunReport,
    notifications_enabled: bool,
    history: Option<&[UsageReading]>,
) {
    println!("{}", format_report(report, notifications_enabled));
    for err in &report.errors {
        if colors_enabled() {
            println!("  {}", err.bright_black());
        } else {
            println!("  {err}");
        }
    }
    if let Some(readings) = history {
        let header = "recent readings";
        if colors_enabled() {
            println!("{}", header.cyan());
        } else {
            println!("{header}");
        }
        for line in format_history(readings) {
            println!("  {line}");
        }
    }
}

pub fn build_json_output(
    report: &RunReport,
    notifications_enabled: bool,
    history: Option<&[UsageReading]>,
) -> serde_json::Value {
    serde_json::json!({
        "usage": report.reading.map(|p| p.value()),
        "saved_id": report.saved_id,
        "notifications_enabled": notifications_enabled,
        "notified": report.notified,
        "errors": report.errors,
        "history": history.map(|rows| {
            rows.iter()
                .map(|r| serde_json::json!({
                    "id": r.id,
                    "timestamp": r.timestamp.to_rfc3339(),
                    "percentage": r.percentage.value(),
                }))
                .collect::<Vec<_>>()
        }),
    })
}

pub fn print_json_output(
    report: &RunReport,
    notifications_enabled: bool,
    history: Option<&[UsageReading]>,
) -> anyhow::Result<()> {
    let json = build_json_output(report, notifications_enabled, history);
    println!("{}", serde_json::to_string(&json)?);
    Ok(())
}
