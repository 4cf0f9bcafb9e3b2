//! Aggregate playtime report assembly.

use chrono::TimeDelta;

use crate::session::Session;

/// Number of sessions shown in the recent view.
pub const RECENT_LIMIT: usize = 20;

/// The terminal aggregate of one scan: chronologically sorted sessions plus
/// summary totals. Construction is the only mutation; consumers render it.
#[derive(Debug, Clone)]
pub struct Report {
    sessions: Vec<Session>,
    total: TimeDelta,
}

impl Report {
    /// Builds a report, sorting sessions chronologically.
    ///
    /// The sort is stable, so sessions with identical start times keep their
    /// incoming relative order.
    #[must_use]
    pub fn from_sessions(mut sessions: Vec<Session>) -> Self {
        sessions.sort_by_key(|s| s.start);
        let total = sessions
            .iter()
            .fold(TimeDelta::zero(), |acc, s| acc + s.duration);
        Self { sessions, total }
    }

    /// All sessions in chronological order.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Exact sum of all session durations.
    #[must_use]
    pub const fn total(&self) -> TimeDelta {
        self.total
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Mean session duration; `None` for an empty report.
    #[must_use]
    pub fn average(&self) -> Option<TimeDelta> {
        if self.sessions.is_empty() {
            return None;
        }
        let count = i32::try_from(self.sessions.len()).unwrap_or(i32::MAX);
        Some(self.total / count)
    }

    /// Total playtime in hours, rounded to 2 decimals for display. The
    /// underlying total keeps full precision.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        round2(total_ms_f64(self.total) / (1000.0 * 60.0 * 60.0))
    }

    /// Total playtime in days, rounded to 2 decimals for display.
    #[must_use]
    pub fn total_days(&self) -> f64 {
        round2(total_ms_f64(self.total) / (1000.0 * 60.0 * 60.0 * 24.0))
    }

    /// The last [`RECENT_LIMIT`] sessions in chronological order.
    #[must_use]
    pub fn recent(&self) -> &[Session] {
        &self.sessions[self.omitted_count()..]
    }

    /// Recent sessions paired with their 1-indexed position in the overall
    /// sequence (so the first entry after 5 omitted sessions is number 6).
    pub fn recent_numbered(&self) -> impl Iterator<Item = (usize, &Session)> {
        let omitted = self.omitted_count();
        self.recent()
            .iter()
            .enumerate()
            .map(move |(i, session)| (omitted + i + 1, session))
    }

    /// Number of sessions preceding the recent window.
    #[must_use]
    pub fn omitted_count(&self) -> usize {
        self.sessions.len().saturating_sub(RECENT_LIMIT)
    }
}

#[allow(clippy::cast_precision_loss)]
fn total_ms_f64(total: TimeDelta) -> f64 {
    total.num_milliseconds() as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
