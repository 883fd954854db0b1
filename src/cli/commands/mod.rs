//! CLI Commands
//!
//! - `summarize`: one-shot summary of a repository URL
//! - `serve`: HTTP API
//! - `config`: inspect the effective configuration

pub mod config;
pub mod serve;
pub mod summarize;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}
