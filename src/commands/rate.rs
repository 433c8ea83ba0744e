use super::open_tracker;
use crate::{
    libs::{
        config::Config,
        error::{StoreError, TrackerError},
        messages::Message,
        quality,
        tracker::SleepTracker,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RateArgs {
    /// ID of the sleep session, as shown by `list`
    id: i64,
    /// Sleep quality from 0 (very bad) to 5 (excellent)
    quality: i32,
}

pub async fn cmd(rate_args: RateArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tracker = open_tracker(&config).await?;
    save_quality(&mut tracker, rate_args.id, rate_args.quality).await
}

pub(crate) async fn save_quality(tracker: &mut SleepTracker, id: i64, sleep_quality: i32) -> Result<()> {
    match tracker.on_set_quality(id, sleep_quality).await {
        Ok(()) => {
            msg_success!(Message::QualitySaved(id, quality::label(sleep_quality).to_string()));
            Ok(())
        }
        Err(TrackerError::InvalidQuality(value)) => msg_bail_anyhow!(Message::InvalidQuality(value)),
        Err(TrackerError::Store(StoreError::NotFound(id))) => msg_bail_anyhow!(Message::SessionNotFound(id)),
        Err(e) => Err(e.into()),
    }
}
