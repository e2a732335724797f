use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod decode;
mod encode;
mod error;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "sctkit")]
#[command(about = "Signed Certificate Timestamp list encoder and decoder", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a binary SCT list and print it
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Encode SCTs from JSON into a binary SCT list
    Encode {
        #[command(flatten)]
        config: encode::Config,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Decode { config } => decode::execute(config),
        Commands::Encode { config } => encode::execute(config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
