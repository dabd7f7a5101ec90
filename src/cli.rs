use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CAMP - realize deployment artifacts from component models
#[derive(Parser, Debug)]
#[command(name = "camp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the model and the template files it refers to
    Check {
        /// Workspace directory (holds camp.yml and template/)
        #[arg(short = 'd', long = "directory", default_value = ".")]
        directory: PathBuf,
    },

    /// Build every configuration of the output directory into its artifact tree
    Realize {
        /// Workspace directory (holds camp.yml and template/)
        #[arg(short = 'd', long = "directory", default_value = ".")]
        directory: PathBuf,
    },

    /// Print the provider stacks of every configuration
    Stacks {
        /// Workspace directory (holds camp.yml and template/)
        #[arg(short = 'd', long = "directory", default_value = ".")]
        directory: PathBuf,
    },
}
