//! Keyboard input translation.
//!
//! Translates Dioxus keyboard events to the row shortcut keys understood by
//! `invite_core`.

use dioxus::html::keyboard_types::Modifiers;
use dioxus::prelude::*;
use invite_core::RowKey;

/// Translate a Dioxus keyboard event to a row shortcut key.
#[must_use]
pub fn translate_row_key(evt: &KeyboardEvent) -> Option<RowKey> {
    row_key_for(&evt.key(), evt.modifiers())
}

/// Map a key chord to a row shortcut key.
///
/// Only the key decides: Ctrl+Backspace or Cmd+Enter in an empty row act
/// like the plain key.
#[must_use]
pub fn row_key_for(key: &Key, modifiers: Modifiers) -> Option<RowKey> {
    log::trace!("row_key_for: key={key:?}, modifiers={modifiers:?}");
    row_key_from(key)
}

/// Map a logical key to a row shortcut key.
#[must_use]
pub fn row_key_from(key: &Key) -> Option<RowKey> {
    match key {
        Key::Enter => Some(RowKey::Enter),
        Key::Backspace => Some(RowKey::Backspace),
        _ => None,
    }
}
