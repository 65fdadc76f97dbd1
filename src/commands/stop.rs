use crate::libs::{config::Config, formatter::format_timestamp, messages::Message, tracker};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Name of a registered activity
    activity_name: String,
}

pub fn cmd(config: &Config, args: StopArgs) -> Result<()> {
    if let Some(end_time) = tracker::stop_session(&config.db, &args.activity_name)? {
        msg_print!(Message::TrackingStopped(args.activity_name, format_timestamp(&end_time)));
    }
    Ok(())
}
