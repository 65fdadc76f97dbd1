use crate::libs::{config::Config, messages::Message, tracker};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Activity name
    name: String,
}

/// Removes an activity row. Sessions recorded against it stay in the store.
pub fn cmd(config: &Config, args: DeleteArgs) -> Result<()> {
    tracker::delete_activity(&config.db, &args.name)?;
    msg_print!(Message::ActivityDeleted(args.name));
    Ok(())
}
