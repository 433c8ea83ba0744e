use super::{open_tracker, rate::save_quality};
use crate::{
    libs::{config::Config, formatter::format_time, messages::Message, quality, tracker::SleepTracker},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Rate the session right away (0-5)
    #[arg(short, long)]
    quality: Option<i32>,
}

pub async fn cmd(stop_args: StopArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tracker = open_tracker(&config).await?;
    stop(&mut tracker, &config.time_format(), stop_args.quality).await
}

/// Stops the running session and optionally rates it.
///
/// A rating outside the scale is rejected before anything is stored.
pub(crate) async fn stop(tracker: &mut SleepTracker, time_format: &str, sleep_quality: Option<i32>) -> Result<()> {
    if let Some(value) = sleep_quality.filter(|value| !quality::is_valid(*value)) {
        msg_bail_anyhow!(Message::InvalidQuality(value));
    }

    if !tracker.stop_enabled().get() {
        msg_info!(Message::NoActiveSession);
        return Ok(());
    }

    tracker.on_stop_tracking().await?;

    let Some(night) = tracker.done_navigating() else {
        return Ok(());
    };
    msg_success!(Message::TrackingStopped(
        format_time(night.start_time_milli, time_format),
        format_time(night.end_time_milli, time_format)
    ));

    let id = night.id.unwrap_or_default();
    match sleep_quality {
        Some(value) => save_quality(tracker, id, value).await,
        None => {
            msg_info!(Message::RatePrompt(id));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::clock::ManualClock;
    use crate::libs::store::SessionStore;
    use std::sync::Arc;

    async fn running_tracker() -> (SessionStore, Arc<ManualClock>, SleepTracker) {
        let store = SessionStore::open_in_memory().unwrap();
        let clock = Arc::new(ManualClock::new(100));
        let mut tracker = SleepTracker::with_options(store.clone(), clock.clone(), "%H:%M".to_string())
            .await
            .unwrap();
        tracker.on_start_tracking().await.unwrap();
        (store, clock, tracker)
    }

    #[tokio::test]
    async fn invalid_rating_leaves_session_running() {
        let (store, clock, mut tracker) = running_tracker().await;
        clock.set(200);

        assert!(stop(&mut tracker, "%H:%M", Some(9)).await.is_err());

        let night = store.get_most_recent().await.unwrap().unwrap();
        assert!(night.is_in_progress());
        assert!(tracker.stop_enabled().get());
    }

    #[tokio::test]
    async fn valid_rating_is_saved_with_the_stop() {
        let (store, clock, mut tracker) = running_tracker().await;
        clock.set(200);

        stop(&mut tracker, "%H:%M", Some(4)).await.unwrap();

        let night = store.get_most_recent().await.unwrap().unwrap();
        assert_eq!(night.end_time_milli, 200);
        assert_eq!(night.sleep_quality, 4);
    }
}
