//! Email row keybindings.
//!
//! Handles Enter/Backspace pressed inside an email input.

use invite_core::RowKey;

use crate::state::{InviteCommand, RowSnapshot};

/// Handle a shortcut key in an email row.
///
/// Only an empty row that is not the trailing row reacts; everything else
/// keeps the key's normal text-editing behavior.
#[must_use]
pub fn handle_row_key(key: RowKey, row: &RowSnapshot) -> Vec<InviteCommand> {
    if row.is_last || !row.value.is_empty() {
        return vec![];
    }
    vec![InviteCommand::KeyShortcut { id: row.id, key }]
}
