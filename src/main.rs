use std::process::ExitCode;

use clap::Parser;
use macicons::cli::Args;
use macicons::logger::log_error;

fn main() -> ExitCode {
    let config = Args::parse().into_config();
    match config.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log_error(&e);
            ExitCode::FAILURE
        }
    }
}
