use crate::libs::{config::Config, formatter::format_timestamp, messages::Message, tracker};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Name of a registered activity
    activity_name: String,
}

pub fn cmd(config: &Config, args: StartArgs) -> Result<()> {
    // Unknown names were already reported by the tracker.
    if let Some(start_time) = tracker::start_session(&config.db, &args.activity_name)? {
        msg_print!(Message::TrackingStarted(args.activity_name, format_timestamp(&start_time)));
    }
    Ok(())
}
