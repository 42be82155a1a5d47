use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};
use crate::commands;

pub fn run() -> Result<()> {
    // Dialoguer Ctrl-C workaround from console-rs/dialoguer#294.
    // We keep SIGINT handler no-op and recover cursor state on prompt errors.
    ctrlc::set_handler(|| {
        // Intentionally no-op: let dialoguer return an interrupted error.
    })
    .context("failed to install Ctrl-C handler")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    let porcelain = cli.global.porcelain;
    match &cli.command {
        Commands::Enc(args) => commands::enc::run(args, porcelain),
        Commands::Dec(args) => commands::dec::run(args, porcelain),
        Commands::Url(args) => commands::url::run(args, porcelain),
        Commands::Completions(args) => commands::completions::run(args.shell),
    }
}
