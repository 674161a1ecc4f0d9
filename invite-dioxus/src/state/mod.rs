//! Dialog state management for Dioxus integration.
//!
//! The `InviteContext` lives in a `Signal` owned by the invite modal and is
//! recreated whenever the modal mounts. Components translate DOM events to
//! `InviteCommand`s, apply them, and run the returned `Effects`.
//!
//! This module provides:
//! - `InviteContext`: the form wrapper with command handling
//! - `InviteSnapshot`: a read-only snapshot of dialog state for rendering
//! - `InviteCommand`: commands that can be applied to the context

mod types;

pub use types::{Effects, InviteCommand, InviteSnapshot, RowSnapshot, SubmitStatus};

use std::sync::Arc;

use invite_core::{InviteForm, InviteSender, ModalLayout, RowId, ShortcutOutcome};

use crate::config::InviteConfig;

/// Shared delivery hook, cheap to clone into every mounted dialog.
pub type SharedSender = Arc<dyn InviteSender + Send + Sync>;

/// The dialog state wrapper.
pub struct InviteContext {
    pub(crate) form: InviteForm,
    layout: ModalLayout,
    sender: SharedSender,

    pub(crate) modal_height: Option<f64>,
    pub(crate) last_submit: Option<SubmitStatus>,
    /// Row to focus once the current batch of commands is applied.
    pending_focus: Option<RowId>,
    dismiss_requested: bool,
}

impl InviteContext {
    #[must_use]
    pub fn new(config: &InviteConfig, sender: SharedSender) -> Self {
        Self {
            form: InviteForm::new(config.invited.clone(), config.pricing),
            layout: config.modal,
            sender,
            modal_height: None,
            last_submit: None,
            pending_focus: None,
            dismiss_requested: false,
        }
    }

    #[must_use]
    pub fn form(&self) -> &InviteForm {
        &self.form
    }

    /// Apply a batch of commands and collect the resulting UI effects.
    pub fn apply(&mut self, commands: impl IntoIterator<Item = InviteCommand>) -> Effects {
        for cmd in commands {
            self.handle_command(cmd);
        }
        Effects {
            focus: self.pending_focus.take(),
            dismiss: std::mem::take(&mut self.dismiss_requested),
        }
    }

    pub(crate) fn handle_command(&mut self, cmd: InviteCommand) {
        log::trace!("Handling command: {cmd:?}");
        match cmd {
            InviteCommand::ChangeValue { id, value } => self.form.change_value(id, value),
            InviteCommand::Blur(id) => self.form.blur(id),
            InviteCommand::Remove(id) => self.form.remove(id),
            InviteCommand::KeyShortcut { id, key } => {
                if let ShortcutOutcome::Removed { focus } = self.form.key_shortcut(id, key) {
                    self.pending_focus = focus;
                }
            }
            InviteCommand::ScrollTo(offset) => self.form.set_scroll_offset(offset),
            InviteCommand::ContentMeasured(content_height) => {
                self.modal_height = self.layout.modal_height(content_height);
                log::debug!(
                    "Content height {content_height}px -> modal height {:?}",
                    self.modal_height
                );
            }
            InviteCommand::Submit => self.submit(),
            InviteCommand::Dismiss => self.dismiss_requested = true,
        }
    }

    fn submit(&mut self) {
        let count = self.form.summary().new_collaborators;
        match self.form.submit(self.sender.as_ref()) {
            Ok(()) => {
                log::info!("Sent {count} invites");
                self.last_submit = Some(SubmitStatus::Sent { count });
            }
            Err(err) => {
                log::error!("Sending invites failed: {err}");
                self.last_submit = Some(SubmitStatus::Failed(err.to_string()));
            }
        }
    }

    /// Create a snapshot of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> InviteSnapshot {
        let rows = self.form.rows();
        let last = rows.last_id();
        let row_snapshots = rows
            .iter()
            .map(|row| RowSnapshot {
                id: row.id(),
                value: row.value().to_string(),
                is_last: Some(row.id()) == last,
                show_clear: !row.is_empty(),
            })
            .collect();

        InviteSnapshot {
            rows: row_snapshots,
            invited_users: self.form.invited_users().to_vec(),
            summary: self.form.summary(),
            plan_label: self.form.plan_label(),
            pricing_tooltip: self.form.pricing().tooltip(),
            scrolled: self.form.is_scrolled(),
            modal_height: self.modal_height,
            submit_status: self.last_submit.clone(),
        }
    }
}
