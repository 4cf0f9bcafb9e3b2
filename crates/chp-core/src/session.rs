//! Session extraction from Clone Hero log files.
//!
//! A session's open instant is the first bracketed ISO-8601 timestamp in the
//! log text and its close instant is the file's last-modified time. Files
//! that yield no valid interval are skipped with a [`Diagnostic`].

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};
use rayon::prelude::*;
use regex::Regex;

use crate::collect::{ScanError, collect_candidates};
use crate::format::format_duration;

/// Bracketed session-open marker, e.g. `[2025-05-21T19:31:22.421-05:00]`.
/// Logs contain many bracketed timestamps; only the first match marks the
/// session open.
static OPEN_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\d{4}-\d{2}-\d{2}T[^\]]+)\]").unwrap());

/// Upper bound on a plausible session, in milliseconds (24 hours).
///
/// Intervals at or beyond this bound usually mean the file was touched by
/// something other than the game closing, so they are rejected. This is a
/// policy constant, not a physical limit.
pub const MAX_SESSION_MS: i64 = 24 * 60 * 60 * 1000;

/// A validated interval of game usage derived from one log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Name of the originating log file, unique within one scan.
    pub source_name: String,
    /// Open instant, parsed from the log's first bracketed timestamp.
    pub start: DateTime<Utc>,
    /// Close instant, taken from the file's last-modified time.
    pub end: DateTime<Utc>,
    /// `end - start`; strictly within `(0, 24h)` by construction.
    pub duration: TimeDelta,
}

/// Why a candidate file was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No bracketed timestamp anywhere in the file content.
    NoTimestampFound,
    /// A bracketed timestamp was found but is not a valid date-time.
    UnparsableTimestamp { raw: String },
    /// The interval fell outside the validity window. The magnitude is the
    /// absolute value of the rejected duration.
    InvalidDuration { magnitude: TimeDelta },
    /// The file could not be stat'ed or read.
    Unreadable { message: String },
}

impl SkipReason {
    /// Stable machine-readable reason code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoTimestampFound => "no_timestamp_found",
            Self::UnparsableTimestamp { .. } => "unparsable_timestamp",
            Self::InvalidDuration { .. } => "invalid_duration",
            Self::Unreadable { .. } => "unreadable",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTimestampFound => f.write_str("no timestamp found"),
            Self::UnparsableTimestamp { raw } => {
                write!(f, "could not parse timestamp \"{raw}\"")
            }
            Self::InvalidDuration { magnitude } => {
                write!(f, "invalid duration ({})", format_duration(*magnitude))
            }
            Self::Unreadable { message } => write!(f, "could not read file: {message}"),
        }
    }
}

/// A human-readable note explaining why a candidate file produced no session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub source_name: String,
    pub reason: SkipReason,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipping {}: {}", self.source_name, self.reason)
    }
}

/// Attempts to derive a session from one candidate file.
///
/// Every failure mode degrades to a [`Diagnostic`]; a single bad file never
/// aborts a scan. The full content is read into memory, which is fine for
/// the small per-run logs the game writes.
pub fn extract_session(dir: &Path, name: &str) -> Result<Session, Diagnostic> {
    let skip = |reason| Diagnostic {
        source_name: name.to_string(),
        reason,
    };

    let path = dir.join(name);
    let end = std::fs::metadata(&path)
        .and_then(|meta| meta.modified())
        .map_err(|e| {
            skip(SkipReason::Unreadable {
                message: e.to_string(),
            })
        })?;
    let end = DateTime::<Utc>::from(end);

    let content = std::fs::read_to_string(&path).map_err(|e| {
        skip(SkipReason::Unreadable {
            message: e.to_string(),
        })
    })?;

    let Some(caps) = OPEN_MARKER_RE.captures(&content) else {
        return Err(skip(SkipReason::NoTimestampFound));
    };
    let raw = &caps[1];

    let start = DateTime::parse_from_rfc3339(raw)
        .map_err(|_| {
            skip(SkipReason::UnparsableTimestamp {
                raw: raw.to_string(),
            })
        })?
        .with_timezone(&Utc);

    let duration = end - start;
    if duration <= TimeDelta::zero() || duration >= TimeDelta::milliseconds(MAX_SESSION_MS) {
        return Err(skip(SkipReason::InvalidDuration {
            magnitude: duration.abs(),
        }));
    }

    Ok(Session {
        source_name: name.to_string(),
        start,
        end,
        duration,
    })
}

/// Result of scanning one directory.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Valid sessions, sorted by start time (stable, so equal starts keep
    /// file-name order).
    pub sessions: Vec<Session>,
    /// One entry per skipped candidate, sorted by file name.
    pub diagnostics: Vec<Diagnostic>,
}

/// Scans a directory of Clone Hero logs and extracts every valid session.
///
/// Only the top-level listing can fail; individual files degrade to
/// diagnostics. Extraction runs in parallel, with deterministic output
/// restored by sorting candidates by name up front and sessions by start
/// time afterwards.
pub fn scan_sessions(dir: &Path) -> Result<ScanOutcome, ScanError> {
    let mut candidates = collect_candidates(dir)?;
    candidates.sort_unstable();
    tracing::debug!(dir = %dir.display(), count = candidates.len(), "collected candidates");

    let results: Vec<Result<Session, Diagnostic>> = candidates
        .par_iter()
        .map(|name| {
            let result = extract_session(dir, name);
            if let Err(diagnostic) = &result {
                tracing::warn!(
                    file = %diagnostic.source_name,
                    reason = diagnostic.reason.as_str(),
                    "skipping log file"
                );
            }
            result
        })
        .collect();

    let mut outcome = ScanOutcome::default();
    for result in results {
        match result {
            Ok(session) => outcome.sessions.push(session),
            Err(diagnostic) => outcome.diagnostics.push(diagnostic),
        }
    }

    outcome.sessions.sort_by_key(|s| s.start);
    Ok(outcome)
}
