//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use toolbelt_help::{CONFIG_ENV, UtilityKind};

/// Show what each toolbelt utility does
///
/// Examples:
///   helpme                  # List every utility
///   helpme as_price         # Details for one utility
///   helpme 3                # Details for the third entry of `helpme --numbered`
///   helpme --kind type      # List only types
///   helpme --interactive    # Browse with a prompt
#[derive(Parser, Debug)]
#[command(name = "helpme")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Utility name or listing number
    pub name: Option<String>,

    /// Only list utilities of this kind (function, type, constant)
    #[arg(short, long)]
    pub kind: Option<UtilityKind>,

    /// Prefix each listed utility with its number
    #[arg(short, long)]
    pub numbered: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Browse with an interactive prompt
    #[arg(short, long, conflicts_with_all = ["name", "json"])]
    pub interactive: bool,

    /// TOML file with extra utilities and render options
    #[arg(short, long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
