use crate::libs::{config::Config, messages::Message, tracker};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Current activity name
    old_name: String,
    /// New activity name
    new_name: String,
}

pub fn cmd(config: &Config, args: UpdateArgs) -> Result<()> {
    tracker::update_activity(&config.db, &args.old_name, &args.new_name)?;
    msg_print!(Message::ActivityUpdated(args.old_name, args.new_name));
    Ok(())
}
