//! Display implementation for sleeptrack application messages.
//!
//! All message text is defined here, in one place, so command code only ever
//! deals with typed `Message` values.

use super::types::Message;
use crate::libs::quality::MAX_QUALITY;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TRACKING MESSAGES ===
            Message::TrackingStarted(start) => format!("Sleep tracking started at {}", start),
            Message::TrackingStopped(start, end) => format!("Sleep tracking stopped ({} - {})", start, end),
            Message::TrackingAlreadyStarted(start) => format!("A sleep session is already in progress since {}", start),
            Message::NoActiveSession => "No sleep session is in progress".to_string(),
            Message::RatePrompt(id) => format!("How was it? Rate it with: sleeptrack rate {} <0-{}>", id, MAX_QUALITY),

            // === QUALITY MESSAGES ===
            Message::QualitySaved(id, label) => format!("Session #{} rated: {}", id, label),
            Message::InvalidQuality(quality) => format!("Invalid sleep quality {}, expected a value from 0 to {}", quality, MAX_QUALITY),
            Message::SessionNotFound(id) => format!("Sleep session #{} not found", id),

            // === HISTORY MESSAGES ===
            Message::SessionsHeader => "Here is your sleep data".to_string(),
            Message::NoSessions => "No sleep sessions recorded yet".to_string(),
            Message::SessionsCleared => "All your data is gone forever".to_string(),
            Message::NothingToClear => "Sleep history is already empty".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened: {}", path),
            Message::SchemaReset(found, expected) => {
                format!("Database schema version {} does not match {}, existing sleep data was wiped", found, expected)
            }
            Message::SchemaCreated(version) => format!("Database schema version {} created", version),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptDatabaseFile => "Database file name".to_string(),
            Message::PromptTimeFormat => "Time format (chrono strftime syntax)".to_string(),
        };
        write!(f, "{}", s)
    }
}
