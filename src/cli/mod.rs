mod args;
mod commands;
mod config;
mod global;
mod handlers;

use clap::Parser;
use std::process::ExitCode;

use args::Commands;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "bfh")]
#[command(version)]
#[command(about = "Binary for humans: encode binary data as short groups of unambiguous symbols", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Unsafe: environment variable access (not thread-safe). Nothing else
        // is running yet.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    let config = config::load_config(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config)?,
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config)?,
        Commands::Check(args) => return handlers::check::handle(args, &cli.global, &config),
        Commands::Config(args) => handlers::config::handle(args, &cli.global, &config)?,
    }

    Ok(ExitCode::SUCCESS)
}
