//! Clone Hero playtime calculator CLI.
//!
//! This crate provides the command-line surface, configuration, and report
//! rendering over `chp-core`.

mod cli;
mod config;
pub mod render;

pub use cli::Cli;
pub use config::Config;
