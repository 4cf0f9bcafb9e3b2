//! Report rendering for console and JSON output.
//!
//! Rendering is a pure consumer of [`Report`]: the core never prints, and
//! these functions never touch the filesystem.

use std::fmt::Write;

use anyhow::Result;
use chrono::TimeZone;
use serde::Serialize;

use chp_core::{Diagnostic, RECENT_LIMIT, Report, format_duration};

/// Fixed display pattern for open/close instants.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats one skipped-file warning line.
#[must_use]
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    format!("⚠️  {diagnostic}")
}

/// Formats the human-readable report.
///
/// The timezone is injected so tests can render with a fixed offset; the
/// binary passes `Local`.
pub fn format_report<Tz: TimeZone>(report: &Report, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut output = String::new();

    writeln!(output, "=== Clone Hero Playtime Calculator ===").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Total sessions: {}", report.session_count()).unwrap();
    writeln!(output, "Total playtime: {}", format_duration(report.total())).unwrap();

    if report.session_count() > 0 {
        writeln!(output).unwrap();
        writeln!(output, "Recent Session Details (last {RECENT_LIMIT}):").unwrap();
        for (position, session) in report.recent_numbered() {
            let opened = session.start.with_timezone(tz).format(TIME_FORMAT);
            let closed = session.end.with_timezone(tz).format(TIME_FORMAT);
            writeln!(
                output,
                "{position}. {} ({opened} - {closed})",
                format_duration(session.duration)
            )
            .unwrap();
        }

        if report.omitted_count() > 0 {
            writeln!(output).unwrap();
            writeln!(output, "... and {} more sessions", report.omitted_count()).unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "=== Summary ===").unwrap();
    writeln!(output, "Total hours: {:.2}", report.total_hours()).unwrap();
    writeln!(output, "Total days: {:.2}", report.total_days()).unwrap();
    if let Some(average) = report.average() {
        writeln!(output, "Average session: {}", format_duration(average)).unwrap();
    }

    output
}

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub total_sessions: usize,
    pub total_duration_ms: i64,
    pub total_hours: f64,
    pub total_days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_duration_ms: Option<i64>,
    pub sessions: Vec<JsonSession>,
}

#[derive(Debug, Serialize)]
pub struct JsonSession {
    pub file: String,
    pub opened: String,
    pub closed: String,
    pub duration_ms: i64,
}

/// Formats the full report as JSON. All sessions are included, not just the
/// recent window; instants are RFC 3339.
pub fn format_report_json(report: &Report) -> Result<String> {
    let json = JsonReport {
        total_sessions: report.session_count(),
        total_duration_ms: report.total().num_milliseconds(),
        total_hours: report.total_hours(),
        total_days: report.total_days(),
        average_duration_ms: report.average().map(|d| d.num_milliseconds()),
        sessions: report
            .sessions()
            .iter()
            .map(|s| JsonSession {
                file: s.source_name.clone(),
                opened: s.start.to_rfc3339(),
                closed: s.end.to_rfc3339(),
                duration_ms: s.duration.num_milliseconds(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&json)?)
}
