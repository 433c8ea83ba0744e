//! Display formatting for sleep sessions.
//!
//! Turns stored sessions into strings: start and end times in the local time
//! zone using a `chrono` format pattern, durations as "HH:MM", and ratings as
//! quality labels. The tracker uses [`format_sessions`] for its display text;
//! the `list` command uses [`FormattedSession`] rows for its table.
//!
//! ## Placeholders
//!
//! - An in-progress session has no end: end renders as `--` and duration as `--:--`
//! - An unrated session renders its quality as `--`
//!
//! ## Examples
//!
//! ```rust
//! use sleeptrack::libs::formatter::format_duration;
//! use chrono::Duration;
//!
//! let duration = Duration::hours(7) + Duration::minutes(45);
//! assert_eq!(format_duration(&duration), "07:45");
//! ```

use crate::libs::messages::Message;
use crate::libs::quality;
use crate::libs::session::SleepSession;
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// A session with every field pre-rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedSession {
    pub id: i64,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub quality: String,
}

impl FormattedSession {
    pub fn new(session: &SleepSession, time_format: &str) -> Self {
        let (end, duration) = if session.is_in_progress() {
            ("--".to_string(), "--:--".to_string())
        } else {
            (
                format_time(session.end_time_milli, time_format),
                format_duration(&Duration::milliseconds(session.duration_milli())),
            )
        };

        FormattedSession {
            id: session.id.unwrap_or(0),
            start: format_time(session.start_time_milli, time_format),
            end,
            duration,
            quality: quality::label(session.sleep_quality).to_string(),
        }
    }
}

/// Formats a duration as "HH:MM"; negative durations become "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Formats epoch milliseconds in the local time zone.
pub fn format_time(epoch_milli: i64, time_format: &str) -> String {
    match DateTime::from_timestamp_millis(epoch_milli) {
        Some(utc) => utc.with_timezone(&Local).format(time_format).to_string(),
        None => "--".to_string(),
    }
}

/// Renders every session, in the given order, as one block of text.
pub fn format_sessions(sessions: &[SleepSession], time_format: &str) -> String {
    let mut text = Message::SessionsHeader.to_string();
    for session in sessions {
        let formatted = FormattedSession::new(session, time_format);
        // Writing into a String cannot fail.
        let _ = write!(
            text,
            "\n\nStart: {}\nEnd: {}\nQuality: {}\nHours:Minutes: {}",
            formatted.start, formatted.end, formatted.quality, formatted.duration
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 60 * 60 * 1000;

    #[test]
    fn duration_is_zero_padded() {
        assert_eq!(format_duration(&Duration::minutes(5)), "00:05");
        assert_eq!(format_duration(&Duration::hours(10)), "10:00");
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
    }

    #[test]
    fn in_progress_session_uses_placeholders() {
        let mut session = SleepSession::new(1_700_000_000_000);
        session.id = Some(3);
        let formatted = FormattedSession::new(&session, "%H:%M");

        assert_eq!(formatted.id, 3);
        assert_eq!(formatted.end, "--");
        assert_eq!(formatted.duration, "--:--");
        assert_eq!(formatted.quality, "--");
    }

    #[test]
    fn stopped_session_shows_duration_and_quality() {
        let mut session = SleepSession::new(1_700_000_000_000);
        session.end_time_milli = session.start_time_milli + 8 * HOUR + 30 * 60 * 1000;
        session.sleep_quality = 4;
        let formatted = FormattedSession::new(&session, "%H:%M");

        assert_eq!(formatted.duration, "08:30");
        assert_eq!(formatted.quality, "Pretty good");
        assert_ne!(formatted.end, "--");
    }

    #[test]
    fn empty_list_renders_header_only() {
        assert_eq!(format_sessions(&[], "%H:%M"), Message::SessionsHeader.to_string());
    }

    #[test]
    fn sessions_render_in_given_order() {
        let mut older = SleepSession::new(0);
        older.end_time_milli = HOUR;
        older.sleep_quality = 1;
        let mut newer = SleepSession::new(10 * HOUR);
        newer.end_time_milli = 12 * HOUR;
        newer.sleep_quality = 5;

        let text = format_sessions(&[newer, older], "%H:%M");

        let excellent = text.find("Quality: Excellent").unwrap();
        let poor = text.find("Quality: Poor").unwrap();
        assert!(excellent < poor);
        assert!(text.contains("Hours:Minutes: 02:00"));
        assert!(text.contains("Hours:Minutes: 01:00"));
    }
}
