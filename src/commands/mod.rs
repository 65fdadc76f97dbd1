pub mod add;
pub mod delete;
pub mod history;
pub mod report;
pub mod start;
pub mod stop;
pub mod update;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::tracker;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new activity")]
    Add(add::AddArgs),
    #[command(about = "Start tracking an activity")]
    Start(start::StartArgs),
    #[command(about = "Stop tracking an activity")]
    Stop(stop::StopArgs),
    #[command(about = "View session history")]
    History,
    #[command(about = "Generate a time report per activity")]
    Report,
    #[command(about = "Delete an activity")]
    Delete(delete::DeleteArgs),
    #[command(about = "Update the name of an activity")]
    Update(update::UpdateArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Prepares the schema, then parses the command line and runs the subcommand.
    pub fn menu(config: &Config) -> Result<()> {
        msg_debug!(Message::ConfigTarget(config.db.to_string()));
        config.db.log_ignored_options();
        tracker::create_tables(&config.db)?;
        msg_print!(Message::TablesCreated);

        let cli = Self::parse();

        match cli.command {
            Commands::Add(args) => add::cmd(config, args),
            Commands::Start(args) => start::cmd(config, args),
            Commands::Stop(args) => stop::cmd(config, args),
            Commands::History => history::cmd(config),
            Commands::Report => report::cmd(config),
            Commands::Delete(args) => delete::cmd(config, args),
            Commands::Update(args) => update::cmd(config, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::try_parse_from(["timetrack", "update", "reading", "study"]).unwrap();
        assert!(matches!(cli.command, Commands::Update(_)));
    }

    #[test]
    fn test_start_requires_name() {
        assert!(Cli::try_parse_from(["timetrack", "start"]).is_err());
    }
}
