//! Days-left computation for task end dates.
//!
//! Counts calendar days only. A task whose end date is today has zero days
//! remaining and is reported as finished.

use chrono::Utc;
use serde::Serialize;

use crate::types::Date;

/// How a task stands relative to its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeadlineStatus {
    /// At least one full calendar day is left.
    #[serde(rename = "time remaining")]
    TimeRemaining,
    /// The end date is today or already past.
    #[serde(rename = "already finished")]
    AlreadyFinished,
}

impl DeadlineStatus {
    /// Classify a signed day count. Zero counts as finished.
    pub fn from_remaining_days(remaining_days: i64) -> Self {
        if remaining_days > 0 {
            Self::TimeRemaining
        } else {
            Self::AlreadyFinished
        }
    }
}

/// Signed number of calendar days from `today` until `end_date`.
///
/// Negative when the end date has already passed.
pub fn remaining_days(end_date: Date, today: Date) -> i64 {
    (end_date - today).num_days()
}

/// The current calendar date in UTC.
pub fn today() -> Date {
    Utc::now().date_naive()
}
