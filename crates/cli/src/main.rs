use bool_tally_cli::app;
use bool_tally_cli::args::Args;
use bool_tally_cli::config::AppConfig;
use bool_tally_cli::logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = AppConfig::from(args);
    logging::init(config.verbosity);

    match app::execute(&config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
