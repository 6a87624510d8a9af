mod cli;
mod commands;
mod config;
mod error;
mod settings;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let code = cli.execute().await;
    std::process::exit(code);
}
