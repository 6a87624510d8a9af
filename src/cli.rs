use crate::commands::*;
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "pacstall")]
#[command(about = "An AUR inspired package manager for Ubuntu")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Detailed output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open config.toml in an editor and validate it afterwards
    Config,

    /// Show version information
    Version,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }

    /// Runs the selected command and returns the process exit code.
    pub async fn execute(self) -> i32 {
        match self.command {
            Commands::Config => config().await,
            Commands::Version => {
                println!("pacstall {}", env!("CARGO_PKG_VERSION"));
                0
            }
        }
    }
}
