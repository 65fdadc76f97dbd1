use std::process::ExitCode;
use timetrack::commands::Cli;
use timetrack::libs::config::Config;
use timetrack::libs::logging::init_logging;
use timetrack::msg_error;

fn run() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    init_logging()?;

    let mut config = Config::read()?;
    config.apply_env()?;

    Cli::menu(&config)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
