use clap::Parser;
use saba_tools::cli::{extract_archive, init_logging, version, UnzipOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "unzip-sjis")]
#[command(version = version(), about = "Extract a zip archive with Shift_JIS entry names", long_about = None)]
struct Cli {
    /// Zip archive to extract into the current directory
    archive: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match extract_archive(&cli.archive, &UnzipOptions::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
