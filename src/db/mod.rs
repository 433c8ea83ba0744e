//! Database layer for the sleeptrack application.
//!
//! A single SQLite table holds every sleep session. This module owns the
//! connection setup, the schema version check and the row-level queries; the
//! async, observable store on top of it lives in `libs::store`.
//!
//! ## Usage
//!
//! ```rust
//! use sleeptrack::db::{db::Db, sessions::Sessions};
//! use sleeptrack::libs::session::SleepSession;
//!
//! let sessions = Sessions::new(Db::open_in_memory()?);
//! sessions.insert(&SleepSession::new(1_700_000_000_000))?;
//! assert_eq!(sessions.get_all()?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and initialization.
pub mod db;

/// Schema version tracking with a wipe-on-mismatch fallback.
pub mod migrations;

/// Queries over the sleep session table.
pub mod sessions;
