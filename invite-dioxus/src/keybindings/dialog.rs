//! Dialog-level keybindings.

use dioxus::prelude::Key;

use crate::state::InviteCommand;

/// Handle a key that bubbled up to the dialog container.
#[must_use]
pub fn handle_dialog_key(key: &Key) -> Vec<InviteCommand> {
    match key {
        Key::Escape => vec![InviteCommand::Dismiss],
        _ => vec![],
    }
}
