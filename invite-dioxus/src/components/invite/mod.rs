//! Invite collaborators modal.
//!
//! Owns the `InviteContext` signal for as long as it is mounted; closing and
//! reopening the dialog starts over with a fresh row list.

mod email_row;
mod invited_list;
mod plan_footer;

pub use email_row::EmailRowInput;
use email_row::ROW_INPUT_CLASS;
pub use invited_list::InvitedList;
pub use plan_footer::PlanFooter;

use dioxus::prelude::*;

use crate::components::{notify_open_change, CloseIcon};
use crate::hooks::dispatch;
use crate::keybindings::handle_dialog_key;
use crate::state::{InviteCommand, InviteContext, SubmitStatus};
use crate::AppState;

/// Scrollable area holding the rows and the invited list.
const CONTENT_SELECTOR: &str = ".invite-content";


/// The invite dialog content: header, email rows, invited users and footer.
#[component]
pub fn InviteModal(#[props(default)] on_open_change: Option<EventHandler<bool>>) -> Element {
    let app_state = use_context::<AppState>();
    let ctx = use_context_provider(|| {
        Signal::new(InviteContext::new(
            &app_state.config,
            app_state.sender.clone(),
        ))
    });

    let snapshot = ctx.read().snapshot();

    let run = move |commands: Vec<InviteCommand>| {
        notify_open_change(dispatch(ctx, commands), |value| {
            if let Some(handler) = on_open_change {
                handler.call(value);
            }
        });
    };

    // Focus the first row and measure the content once it is laid out
    let onmounted = move |_evt: MountedEvent| async move {
        document::eval(&focus_first_row_script());
        let height = document::eval(&format!(
            "document.querySelector('{CONTENT_SELECTOR}')?.scrollHeight || 0"
        ));
        if let Ok(val) = height.await {
            if let Some(content_height) = val.as_f64() {
                run(vec![InviteCommand::ContentMeasured(content_height)]);
            }
        }
    };

    let onscroll = move |_evt: ScrollEvent| {
        let offset = document::eval(&format!(
            "document.querySelector('{CONTENT_SELECTOR}')?.scrollTop || 0"
        ));
        spawn(async move {
            if let Ok(val) = offset.await {
                run(vec![InviteCommand::ScrollTo(val.as_f64().unwrap_or(0.0))]);
            }
        });
    };

    let onkeydown = move |evt: KeyboardEvent| {
        let commands = handle_dialog_key(&evt.key());
        if !commands.is_empty() {
            evt.prevent_default();
            run(commands);
        }
    };

    let header_class = if snapshot.scrolled {
        "invite-header invite-header-scrolled"
    } else {
        "invite-header"
    };
    let height_style = snapshot.height_style();
    let status = snapshot.submit_status.as_ref().map(|status| match status {
        SubmitStatus::Sent { count } => ("invite-status", format!("Sent {count} invites")),
        SubmitStatus::Failed(message) => ("invite-status invite-status-error", message.clone()),
    });

    rsx! {
        div {
            class: "invite-modal",
            style: "{height_style}",
            onkeydown: onkeydown,

            // Header
            div {
                class: "{header_class}",
                h2 { class: "invite-title", "Invite Collaborators" }
                button {
                    class: "icon-btn",
                    title: "Close",
                    onclick: move |_| run(vec![InviteCommand::Dismiss]),
                    CloseIcon {}
                }
            }

            // Rows and invited users
            div {
                class: "invite-content",
                onmounted: onmounted,
                onscroll: onscroll,

                div {
                    class: "invite-rows",
                    for row in snapshot.rows.iter() {
                        EmailRowInput { key: "{row.id}", row: row.clone() }
                    }
                }

                InvitedList { users: snapshot.invited_users.clone() }
            }

            // Plan summary and actions
            div {
                class: "invite-footer",

                PlanFooter {
                    summary: snapshot.summary,
                    label: snapshot.plan_label,
                    tooltip: snapshot.pricing_tooltip.clone(),
                }

                if let Some((class, text)) = status {
                    div { class: "{class}", "{text}" }
                }

                div {
                    class: "invite-actions",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| run(vec![InviteCommand::Dismiss]),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| run(vec![InviteCommand::Submit]),
                        "Send invites"
                    }
                }
            }
        }
    }
}

/// Script moving focus into the first row input.
fn focus_first_row_script() -> String {
    format!("document.querySelector('.{ROW_INPUT_CLASS}')?.focus();")
}
