//! Terminal front end.
//!
//! Each subcommand builds a [`SleepTracker`] over the configured database,
//! performs one user action and renders the resulting state and events.

pub mod clear;
pub mod init;
pub mod list;
pub mod rate;
pub mod start;
pub mod stop;

use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::store::SessionStore;
use crate::libs::tracker::SleepTracker;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start tracking a sleep session")]
    Start,
    #[command(about = "Stop the sleep session in progress")]
    Stop(stop::StopArgs),
    #[command(about = "Rate the quality of a sleep session", arg_required_else_help = true)]
    Rate(rate::RateArgs),
    #[command(about = "Delete all recorded sleep sessions")]
    Clear,
    #[command(about = "Display recorded sleep sessions")]
    List(list::ListArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start => start::cmd().await,
            Commands::Stop(args) => stop::cmd(args).await,
            Commands::Rate(args) => rate::cmd(args).await,
            Commands::Clear => clear::cmd().await,
            Commands::List(args) => list::cmd(args).await,
        }
    }
}

/// Opens the configured store and builds a tracker on the system clock.
pub(crate) async fn open_tracker(config: &Config) -> Result<SleepTracker> {
    let store = SessionStore::open(DataStorage::new().get_path(&config.database_file())?)?;
    let tracker = SleepTracker::with_options(store, Arc::new(SystemClock), config.time_format()).await?;
    Ok(tracker)
}
