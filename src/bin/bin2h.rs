use clap::Parser;
use saba_tools::cli::{convert_file, init_logging, version, Bin2hOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bin2h")]
#[command(version = version(), about = "Convert a binary file into a C header declaring its bytes", long_about = None)]
struct Cli {
    /// File to embed; writes <FILE name>.h to the current directory
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match convert_file(&cli.input, &Bin2hOptions::default()) {
        Ok(_) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
