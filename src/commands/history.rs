use crate::libs::{
    config::Config,
    formatter::{format_end, format_timestamp},
    messages::Message,
    tracker,
};
use crate::msg_print;
use anyhow::Result;

/// Prints one line per recorded session.
pub fn cmd(config: &Config) -> Result<()> {
    for record in tracker::view_history(&config.db)? {
        msg_print!(Message::HistoryLine {
            start: format_timestamp(&record.start),
            end: format_end(record.end.as_ref()),
            activity: record.activity,
        });
    }
    Ok(())
}
