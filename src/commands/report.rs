use crate::libs::{config::Config, formatter::format_total, messages::Message, tracker};
use crate::msg_print;
use anyhow::Result;

/// Prints the completed time of every activity that has any.
pub fn cmd(config: &Config) -> Result<()> {
    for entry in tracker::generate_report(&config.db)? {
        msg_print!(Message::ReportLine {
            total: format_total(entry.total_seconds),
            activity: entry.activity,
        });
    }
    Ok(())
}
