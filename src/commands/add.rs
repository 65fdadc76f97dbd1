use crate::libs::{config::Config, messages::Message, tracker};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Activity name
    name: String,
}

/// Registers an activity. Adding a name twice is not an error.
pub fn cmd(config: &Config, args: AddArgs) -> Result<()> {
    tracker::add_activity(&config.db, &args.name)?;
    msg_print!(Message::ActivityAdded(args.name));
    Ok(())
}
