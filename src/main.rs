//! CAMP CLI - realize deployment artifacts from component models
//!
//! Usage: camp <COMMAND> [-d DIR]
//!
//! Commands:
//!   check    Validate the model and its template files
//!   realize  Build every configuration into out/config_<n>/
//!   stacks   Print the provider stacks of every configuration

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { directory } => {
            commands::check::cmd_check(&directory, cli.json, cli.verbose)
        }
        Commands::Realize { directory } => {
            commands::realize::cmd_realize(&directory, cli.json, cli.verbose)
        }
        Commands::Stacks { directory } => {
            commands::stacks::cmd_stacks(&directory, cli.json, cli.verbose)
        }
    }
}
