//! Custom Dioxus hooks for invite-dioxus components.

use dioxus::prelude::*;
use invite_core::RowId;

use crate::state::{InviteCommand, InviteContext};

/// Get the invite context signal provided by the enclosing modal.
#[must_use]
pub fn use_invite_context() -> Signal<InviteContext> {
    use_context::<Signal<InviteContext>>()
}

/// DOM id of the input element for a row.
#[must_use]
pub fn row_dom_id(id: RowId) -> String {
    format!("invite-email-{id}")
}

/// Apply commands to the context and run the focus effect.
///
/// Returns `true` when the dialog asked to be dismissed; the caller owns the
/// `on_open_change` callback and decides what to do with it.
pub fn dispatch(mut ctx: Signal<InviteContext>, commands: Vec<InviteCommand>) -> bool {
    if commands.is_empty() {
        return false;
    }
    let effects = ctx.write().apply(commands);

    if let Some(id) = effects.focus {
        let dom_id = row_dom_id(id);
        document::eval(&format!(
            "requestAnimationFrame(() => document.getElementById('{dom_id}')?.focus());"
        ));
    }

    effects.dismiss
}
