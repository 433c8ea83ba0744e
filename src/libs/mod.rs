//! Core library modules for the sleeptrack application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, errors
//! - **Sleep Data**: The session record, the quality scale and the async store
//! - **Reactive State**: Observable values, derived values and one-shot events
//! - **Tracking**: The tracker that drives start, stop, clear and rating
//! - **User Interface**: Text formatting and table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sleeptrack::libs::store::SessionStore;
//! use sleeptrack::libs::tracker::SleepTracker;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut tracker = SleepTracker::new(SessionStore::open_default()?).await?;
//! tracker.on_start_tracking().await?;
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod observable;
pub mod quality;
pub mod session;
pub mod store;
pub mod tracker;
pub mod view;
