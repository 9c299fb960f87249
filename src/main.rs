use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use write_to_file::config::{AppendConfig, NewlineFlag};
use write_to_file::writer;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let newline = if cli.strict {
        NewlineFlag::from_strict(&cli.newline)?
    } else {
        NewlineFlag::from_legacy(&cli.newline)
    };
    let cfg = AppendConfig::new(cli.file, cli.content, newline);
    log::debug!("{:?}", cfg);
    writer::append(&cfg)?;
    Ok(())
}

// Repeated flags are accepted and the last value wins.
#[derive(Parser)]
#[command(name = "write-to-file")]
#[command(version, about = "Append a string to a file, optionally after a newline")]
#[command(args_override_self = true)]
struct Cli {
    /// File to append to; created if missing
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: PathBuf,
    /// Text to append
    #[arg(short = 'c', long = "content", value_name = "CONTENT", allow_hyphen_values = true)]
    content: String,
    /// Prefix the content with a newline when exactly `True`
    #[arg(short = 'n', long = "newline", value_name = "NEWLINE_FLAG")]
    newline: String,
    /// Reject -n values other than `True` and `False`
    #[arg(long)]
    strict: bool,
}
