use super::open_tracker;
use crate::{
    libs::{config::Config, formatter::format_time, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut tracker = open_tracker(&config).await?;

    if !tracker.start_enabled().get() {
        if let Some(night) = tracker.tonight().get() {
            msg_warning!(Message::TrackingAlreadyStarted(format_time(night.start_time_milli, &config.time_format())));
        }
        return Ok(());
    }

    tracker.on_start_tracking().await?;

    if let Some(night) = tracker.tonight().get() {
        msg_success!(Message::TrackingStarted(format_time(night.start_time_milli, &config.time_format())));
    }
    Ok(())
}
