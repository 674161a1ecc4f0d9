//! Entry point for the invite binary.

mod args;
mod tracing_setup;

use anyhow::Result;
use invite_dioxus::InviteConfig;

use crate::args::StartupAction;

fn main() -> Result<()> {
    let config = match args::parse_args() {
        // An explicit config file must load; a broken default one only warns
        StartupAction::ConfigFile(path) => InviteConfig::load_from(&path)?,
        StartupAction::Default => InviteConfig::load_default().unwrap_or_else(|err| {
            eprintln!("Warning: failed to load invite.toml: {err}");
            eprintln!("Using default configuration");
            InviteConfig::default()
        }),
    };

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging);

    log::info!("Starting invite dialog");

    invite_dioxus::launch(config)
}
