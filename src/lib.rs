//! # sleeptrack - Sleep session tracking
//!
//! Records sleep sessions (start and end timestamps plus a quality rating)
//! in a local SQLite database and exposes them through an observable tracker
//! that a UI layer can watch and drive.
//!
//! ## Features
//!
//! - **Session Store**: Durable single-table storage with a live "all sessions" feed
//! - **Sleep Tracker**: Reactive state for the current night, action availability and one-shot events
//! - **Quality Rating**: Rate stopped sessions on a 0-5 scale
//! - **Terminal Front End**: `start`, `stop`, `rate`, `clear` and `list` commands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sleeptrack::libs::store::SessionStore;
//! use sleeptrack::libs::tracker::SleepTracker;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SessionStore::open_default()?;
//!     let mut tracker = SleepTracker::new(store).await?;
//!     tracker.on_start_tracking().await?;
//!     assert!(tracker.stop_enabled().get());
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
