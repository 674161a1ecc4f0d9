//! Keybinding handlers for the invite dialog.
//!
//! Handlers map a key to the commands it should trigger. A non-empty result
//! means the key was consumed and its default browser action must be
//! prevented.

mod dialog;
mod row;
mod translate;

pub use dialog::handle_dialog_key;
pub use row::handle_row_key;
pub use translate::{row_key_for, row_key_from, translate_row_key};
