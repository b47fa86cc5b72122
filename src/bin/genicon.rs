use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use image::ImageFormat;
use macicons::config::{DEFAULT_SOURCE_IMAGE, EXPECTED_SIZE};
use macicons::logger::{log_error, log_line};
use macicons::sample;

#[derive(Debug, Parser)]
#[command(name = "genicon", version, about = "Write a placeholder 1024x1024 source icon.")]
struct Args {
    /// Where to write the PNG.
    #[arg(value_name = "OUT", default_value = DEFAULT_SOURCE_IMAGE)]
    out: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let img = sample::render(EXPECTED_SIZE.0);
    match img.save_with_format(&args.out, ImageFormat::Png) {
        Ok(()) => {
            log_line(&format!("Wrote {}", args.out.display()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_error(&e);
            ExitCode::FAILURE
        }
    }
}
