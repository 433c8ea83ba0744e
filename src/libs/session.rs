//! The sleep session record.

use serde::{Deserialize, Serialize};

/// Quality value of a session that has not been rated yet.
pub const UNRATED: i32 = -1;

/// One night of sleep.
///
/// A freshly created session has `end_time_milli == start_time_milli`, which
/// marks it as still in progress, and `sleep_quality == UNRATED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSession {
    /// Row key, assigned by the store on insert.
    pub id: Option<i64>,
    /// Start of the session in milliseconds since the Unix epoch.
    pub start_time_milli: i64,
    /// End of the session in milliseconds since the Unix epoch.
    pub end_time_milli: i64,
    /// Quality rating from 0 to 5, or `UNRATED`.
    pub sleep_quality: i32,
}

impl SleepSession {
    /// Creates an unsaved, in-progress, unrated session starting at `start_time_milli`.
    pub fn new(start_time_milli: i64) -> Self {
        SleepSession {
            id: None,
            start_time_milli,
            end_time_milli: start_time_milli,
            sleep_quality: UNRATED,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.end_time_milli == self.start_time_milli
    }

    pub fn is_rated(&self) -> bool {
        self.sleep_quality != UNRATED
    }

    /// Length of the session in milliseconds; zero while in progress.
    pub fn duration_milli(&self) -> i64 {
        (self.end_time_milli - self.start_time_milli).max(0)
    }
}
