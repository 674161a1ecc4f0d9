//! Main application component.
//!
//! The page shell: owns the dialog's open state and renders the invite
//! modal inside the dialog shell.

use dioxus::prelude::*;

use crate::components::{DialogShell, InviteModal};
use crate::AppState;

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();
    let mut open = use_signal(|| app_state.config.dialog.open_on_start);

    let on_open_change = move |value: bool| {
        log::info!("Dialog open state changed: {value}");
        open.set(value);
    };

    rsx! {
        document::Title { "{app_state.config.window.title}" }

        div {
            class: "page",

            if !open() {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| open.set(true),
                    "Invite collaborators"
                }
            }

            DialogShell {
                open: open(),
                on_open_change: on_open_change,
                InviteModal { on_open_change: on_open_change }
            }
        }
    }
}
