//! Core domain logic for the Clone Hero playtime calculator.
//!
//! This crate contains the fundamental types and logic for:
//! - Collection: discovering candidate log files in a directory
//! - Extraction: deriving a validated open/close interval per log file
//! - Aggregation: chronological sorting and summary statistics

pub mod collect;
pub mod format;
pub mod report;
pub mod session;

pub use collect::{LOG_SUFFIXES, ScanError, collect_candidates};
pub use format::format_duration;
pub use report::{RECENT_LIMIT, Report};
pub use session::{
    Diagnostic, MAX_SESSION_MS, ScanOutcome, Session, SkipReason, extract_session, scan_sessions,
};
