//! Already-invited users.

use dioxus::prelude::*;
use invite_core::InvitedUser;

/// Email and status of each invited user, in the order given.
#[component]
pub fn InvitedList(users: Vec<InvitedUser>) -> Element {
    if users.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "invited-list",
            for (index, user) in users.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "invited-user",
                    span { class: "invited-email", "{user.email}" }
                    span { class: "invited-status", "{user.status}" }
                }
            }
        }
    }
}
