//! Command implementations for the pacstall CLI

mod config;
mod utils;

pub use config::config;
