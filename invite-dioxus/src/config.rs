//! Configuration for the invite dialog.
//!
//! Configuration is loaded from `<config dir>/invite/invite.toml` and provides
//! window, dialog, pricing, modal sizing, logging and seed data settings.
//! Every section is optional; missing values fall back to the defaults.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::BaseStrategy;
use invite_core::{seed_invited_users, InvitedUser, ModalLayout, Pricing};
use serde::Deserialize;

/// Configuration loaded from `invite.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    pub window: WindowConfig,
    pub dialog: DialogConfig,
    pub pricing: Pricing,
    pub modal: ModalLayout,
    pub logging: LoggingConfig,
    /// Users listed as already invited.
    pub invited: Vec<InvitedUser>,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Dialog configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Whether the dialog is shown as soon as the window opens.
    pub open_on_start: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            dialog: DialogConfig::default(),
            pricing: Pricing::default(),
            modal: ModalLayout::default(),
            logging: LoggingConfig::default(),
            invited: seed_invited_users(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Invite Collaborators".to_string(),
            width: 960.0,
            height: 860.0,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            open_on_start: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("invite-dioxus.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl InviteConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf> {
        let strategy = etcetera::choose_base_strategy()?;
        Ok(strategy.config_dir().join("invite").join("invite.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<InviteConfig>(&content)?;
        Ok(config)
    }

    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    #[must_use]
    pub fn with_open_on_start(mut self, open: bool) -> Self {
        self.dialog.open_on_start = open;
        self
    }

    #[must_use]
    pub fn with_pricing(mut self, base_price: u32, price_per_collaborator: u32) -> Self {
        self.pricing = Pricing {
            base_price,
            price_per_collaborator,
        };
        self
    }

    /// Replace the list of already-invited users.
    #[must_use]
    pub fn with_invited(mut self, invited: Vec<InvitedUser>) -> Self {
        self.invited = invited;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Generate CSS custom properties for the modal geometry.
    ///
    /// Returns a `<style>` block that overrides the stylesheet's `:root` defaults.
    #[must_use]
    pub fn modal_css(&self) -> String {
        format!(
            "<style>:root {{ --modal-width: {}px; --modal-max-height: {}px; }}</style>",
            self.modal.width, self.modal.max_height
        )
    }
}
