//! Invite Dioxus - desktop frontend for the invite collaborators dialog
//!
//! This crate renders the dialog with Dioxus and drives the
//! framework-independent state in `invite_core`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use invite_dioxus::InviteConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = InviteConfig::load_default()?;
//!     invite_dioxus::launch(config)
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. `AppState` (config + delivery hook) is shared via Dioxus context
//! 2. The invite modal owns an `InviteContext` signal while it is mounted
//! 3. DOM events are translated to `InviteCommand`s and applied to the context
//! 4. Components render from `InviteSnapshot`s taken after each change

use std::sync::Arc;

use anyhow::Result;
use invite_core::{InviteSender, SubmitError};

// Public library modules
pub mod components;
pub mod config;
pub mod hooks;
pub mod keybindings;
pub mod state;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use config::InviteConfig;
pub use state::{InviteCommand, InviteContext, InviteSnapshot, SharedSender};

/// Stylesheet for the page and dialog.
const STYLESHEET: &str = include_str!("../assets/invite.css");

/// Launch the Dioxus desktop application with the default delivery hook.
pub fn launch(config: InviteConfig) -> Result<()> {
    launch_with_sender(config, Arc::new(LogSender))
}

/// Launch the Dioxus desktop application.
///
/// `sender` receives the entered emails when "Send invites" is pressed.
pub fn launch_with_sender(config: InviteConfig, sender: SharedSender) -> Result<()> {
    // Stylesheet first, then the config-driven overrides
    let custom_head = format!("<style>{STYLESHEET}</style>{}", config.modal_css());

    let window = dioxus::desktop::WindowBuilder::new()
        .with_title(&config.window.title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window.width,
            config.window.height,
        ));

    let app_state = AppState {
        config: Arc::new(config),
        sender,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(window)
                .with_custom_head(custom_head),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<InviteConfig>,
    pub sender: SharedSender,
}

/// Delivery hook that only logs the recipients.
///
/// Invite delivery has no backend yet; this keeps the "Send invites"
/// action observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

impl InviteSender for LogSender {
    fn send(&self, emails: &[String]) -> Result<(), SubmitError> {
        for email in emails {
            log::info!("Invite queued for {email}");
        }
        Ok(())
    }
}
