//! helpme: terminal front end for the toolbelt help registry

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use toolbelt_help::{HelpConfig, HelpRegistry, logging};

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(?cli, "Parsed arguments");

    let config = match &cli.config {
        Some(path) => HelpConfig::load(path)?,
        None => HelpConfig::default(),
    };
    let registry = HelpRegistry::from_config(&config)?;

    if cli.interactive {
        return interactive::run(&registry);
    }

    match cli.name.as_deref() {
        Some(name) => commands::run_show(&registry, name, cli.json),
        None => commands::run_list(&registry, cli.kind, cli.numbered, cli.json),
    }
}
