use super::open_tracker;
use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut tracker = open_tracker(&config).await?;

    if !tracker.clear_enabled().get() {
        msg_info!(Message::NothingToClear);
        return Ok(());
    }

    tracker.on_clear().await?;

    if tracker.done_showing_snackbar() {
        msg_success!(Message::SessionsCleared);
    }
    Ok(())
}
