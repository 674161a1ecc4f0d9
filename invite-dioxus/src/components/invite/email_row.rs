//! A single email entry row.

use dioxus::prelude::*;

use crate::components::MinusIcon;
use crate::hooks::{dispatch, row_dom_id, use_invite_context};
use crate::keybindings::{handle_row_key, translate_row_key};
use crate::state::{InviteCommand, RowSnapshot};

/// Class of every row's input element.
pub(super) const ROW_INPUT_CLASS: &str = "invite-row-input";

/// Email input with its clear button.
#[component]
pub fn EmailRowInput(row: RowSnapshot) -> Element {
    let ctx = use_invite_context();
    let id = row.id;
    let dom_id = row_dom_id(id);
    let row_class = if row.is_last {
        "invite-row"
    } else {
        "invite-row invite-row-divided"
    };

    let key_row = row.clone();
    let onkeydown = move |evt: KeyboardEvent| {
        let Some(key) = translate_row_key(&evt) else {
            return;
        };
        let commands = handle_row_key(key, &key_row);
        if commands.is_empty() {
            return;
        }
        evt.prevent_default();
        evt.stop_propagation();
        dispatch(ctx, commands);
    };

    rsx! {
        div {
            class: "{row_class}",

            input {
                id: "{dom_id}",
                class: ROW_INPUT_CLASS,
                r#type: "email",
                placeholder: "Add an email...",
                value: "{row.value}",
                oninput: move |evt: FormEvent| {
                    dispatch(ctx, vec![InviteCommand::ChangeValue { id, value: evt.value() }]);
                },
                onblur: move |_| {
                    dispatch(ctx, vec![InviteCommand::Blur(id)]);
                },
                onkeydown: onkeydown,
            }

            if row.show_clear {
                button {
                    class: "icon-btn invite-row-clear",
                    title: "Remove",
                    onclick: move |_| {
                        dispatch(ctx, vec![InviteCommand::Remove(id)]);
                    },
                    MinusIcon {}
                }
            }
        }
    }
}
