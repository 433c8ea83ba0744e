use super::open_tracker;
use crate::{
    libs::{config::Config, formatter::FormattedSession, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the plain text summary instead of a table
    #[arg(short, long)]
    text: bool,
}

pub async fn cmd(list_args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let tracker = open_tracker(&config).await?;

    if list_args.text {
        msg_print!(tracker.nights_text().get());
        return Ok(());
    }

    let time_format = config.time_format();
    let rows: Vec<FormattedSession> = tracker.nights().with(|nights| nights.iter().map(|night| FormattedSession::new(night, &time_format)).collect());
    if rows.is_empty() {
        msg_info!(Message::NoSessions);
        return Ok(());
    }

    msg_print!(Message::SessionsHeader, true);
    View::sessions(&rows);
    Ok(())
}
