//! The sleep tracker: UI-facing state and user actions.
//!
//! `SleepTracker` sits between a UI layer and the [`SessionStore`]. It exposes
//! read-only observables for the UI to render and turns the user's actions
//! (start, stop, clear, rate) into store calls followed by state updates.
//!
//! ## Reactive State
//!
//! | Observable            | Derived from | Value                                    |
//! |-----------------------|--------------|------------------------------------------|
//! | `tonight`             | actions      | the in-progress session, if any          |
//! | `nights_text`         | store feed   | all sessions rendered for display        |
//! | `start_enabled`       | `tonight`    | `tonight` is `None`                      |
//! | `stop_enabled`        | `tonight`    | `tonight` is `Some`                      |
//! | `clear_enabled`       | store feed   | at least one session is stored           |
//! | `show_snackbar`       | `on_clear`   | one-shot, raised after a clear           |
//! | `navigate_to_quality` | `on_stop`    | one-shot carrying the stopped session    |
//!
//! ## Execution Model
//!
//! Actions take `&mut self`, so the actions of one tracker never interleave.
//! Each action suspends only while the store runs its query on the blocking
//! pool, then resumes on the caller's task and updates state there.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sleeptrack::libs::store::SessionStore;
//! use sleeptrack::libs::tracker::SleepTracker;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut tracker = SleepTracker::new(SessionStore::open_default()?).await?;
//! let _sub = tracker.start_enabled().observe(|enabled| println!("start enabled: {}", enabled));
//!
//! tracker.on_start_tracking().await?;
//! tracker.on_stop_tracking().await?;
//! if let Some(night) = tracker.done_navigating() {
//!     tracker.on_set_quality(night.id.unwrap_or_default(), 4).await?;
//! }
//! # Ok(())
//! # }
//! ```

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::DEFAULT_TIME_FORMAT;
use crate::libs::error::{StoreError, TrackerError};
use crate::libs::formatter::format_sessions;
use crate::libs::observable::{Observable, OneShot};
use crate::libs::quality;
use crate::libs::session::SleepSession;
use crate::libs::store::SessionStore;
use std::sync::Arc;
use tracing::debug;

pub struct SleepTracker {
    store: SessionStore,
    clock: Arc<dyn Clock>,

    tonight: Observable<Option<SleepSession>>,
    nights: Observable<Vec<SleepSession>>,
    nights_text: Observable<String>,
    start_enabled: Observable<bool>,
    stop_enabled: Observable<bool>,
    clear_enabled: Observable<bool>,

    show_snackbar: OneShot<()>,
    navigate_to_quality: OneShot<SleepSession>,
}

impl SleepTracker {
    /// Creates a tracker on the system clock with the default time format.
    pub async fn new(store: SessionStore) -> Result<Self, TrackerError> {
        Self::with_options(store, Arc::new(SystemClock), DEFAULT_TIME_FORMAT.to_string()).await
    }

    /// Creates a tracker and loads tonight's session from the store.
    pub async fn with_options(store: SessionStore, clock: Arc<dyn Clock>, time_format: String) -> Result<Self, TrackerError> {
        let nights = store.get_all();
        let nights_text = nights.map(move |nights| format_sessions(nights, &time_format));
        let clear_enabled = nights.map(|nights| !nights.is_empty());

        let tonight = Observable::new(None);
        let start_enabled = tonight.map(|tonight: &Option<SleepSession>| tonight.is_none());
        let stop_enabled = tonight.map(|tonight: &Option<SleepSession>| tonight.is_some());

        let tracker = SleepTracker {
            store,
            clock,
            tonight,
            nights,
            nights_text,
            start_enabled,
            stop_enabled,
            clear_enabled,
            show_snackbar: OneShot::new(),
            navigate_to_quality: OneShot::new(),
        };

        let tonight = tracker.tonight_from_database().await?;
        tracker.tonight.set(tonight);
        Ok(tracker)
    }

    /// Starts a new session at the current time.
    pub async fn on_start_tracking(&mut self) -> Result<(), TrackerError> {
        let night = SleepSession::new(self.clock.now_millis());
        let id = self.store.insert(night).await?;
        debug!(id, "sleep tracking started");

        let tonight = self.tonight_from_database().await?;
        self.tonight.set(tonight);
        Ok(())
    }

    /// Stops tonight's session and asks the UI to collect a quality rating.
    ///
    /// Does nothing when no session is in progress. `tonight` only ever holds
    /// an in-progress session, so it becomes `None` here and starting a new
    /// session is allowed right away. The stopped session is delivered
    /// through `navigate_to_quality` instead.
    pub async fn on_stop_tracking(&mut self) -> Result<(), TrackerError> {
        let Some(mut night) = self.tonight.get() else {
            return Ok(());
        };

        // An end equal to the start would still read as "in progress".
        night.end_time_milli = self.clock.now_millis().max(night.start_time_milli.saturating_add(1));
        self.store.update(night.clone()).await?;
        debug!(id = night.id, end = night.end_time_milli, "sleep tracking stopped");

        self.tonight.set(None);
        self.navigate_to_quality.raise(night);
        Ok(())
    }

    /// Deletes all sessions and raises the snackbar event.
    pub async fn on_clear(&mut self) -> Result<(), TrackerError> {
        self.store.clear().await?;
        debug!("sleep history cleared");

        self.tonight.set(None);
        self.show_snackbar.raise(());
        Ok(())
    }

    /// Stores a 0-5 quality rating for the session with `night_id`.
    pub async fn on_set_quality(&mut self, night_id: i64, quality: i32) -> Result<(), TrackerError> {
        if !quality::is_valid(quality) {
            return Err(TrackerError::InvalidQuality(quality));
        }

        let mut night = self.store.get_by_id(night_id).await?.ok_or(StoreError::NotFound(night_id))?;
        night.sleep_quality = quality;
        self.store.update(night).await?;
        debug!(id = night_id, quality, "sleep quality saved");
        Ok(())
    }

    /// Acknowledges the snackbar event. Returns whether one was pending.
    pub fn done_showing_snackbar(&self) -> bool {
        self.show_snackbar.consume().is_some()
    }

    /// Acknowledges the navigation event, returning the session it carried.
    pub fn done_navigating(&self) -> Option<SleepSession> {
        self.navigate_to_quality.consume()
    }

    pub fn tonight(&self) -> &Observable<Option<SleepSession>> {
        &self.tonight
    }

    pub fn nights(&self) -> &Observable<Vec<SleepSession>> {
        &self.nights
    }

    pub fn nights_text(&self) -> &Observable<String> {
        &self.nights_text
    }

    pub fn start_enabled(&self) -> &Observable<bool> {
        &self.start_enabled
    }

    pub fn stop_enabled(&self) -> &Observable<bool> {
        &self.stop_enabled
    }

    pub fn clear_enabled(&self) -> &Observable<bool> {
        &self.clear_enabled
    }

    pub fn show_snackbar(&self) -> &OneShot<()> {
        &self.show_snackbar
    }

    pub fn navigate_to_quality(&self) -> &OneShot<SleepSession> {
        &self.navigate_to_quality
    }

    /// The most recent session if it is still in progress.
    async fn tonight_from_database(&self) -> Result<Option<SleepSession>, StoreError> {
        let night = self.store.get_most_recent().await?;
        Ok(night.filter(SleepSession::is_in_progress))
    }
}
