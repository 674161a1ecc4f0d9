//! Command-line argument parsing.

use std::path::PathBuf;

/// Determines what configuration to start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupAction {
    /// No argument provided - use the default config location.
    Default,
    /// Explicit configuration file.
    ConfigFile(PathBuf),
}

/// Parse command-line arguments and determine the startup action.
pub fn parse_args() -> StartupAction {
    parse(std::env::args().skip(1))
}

fn parse(args: impl Iterator<Item = String>) -> StartupAction {
    let args: Vec<String> = args.collect();
    if args.len() > 1 {
        log::warn!("Ignoring extra arguments: {:?}", args.get(1..));
    }

    match args.first() {
        Some(path) => StartupAction::ConfigFile(PathBuf::from(path)),
        None => StartupAction::Default,
    }
}
