mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod render;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("pdbq v{} starting up", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let file_config = config::load(cli.config.as_deref())?;
    let parse_options = config::effective_parse_options(&cli, &file_config);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, &parse_options),
        Commands::Near(args) => commands::near::run(args, &file_config, &parse_options),
        Commands::Map(args) => commands::map::run(args, &parse_options),
        Commands::Mask(args) => commands::mask::run(args, &file_config, &parse_options),
    }
}
