//! Plan label, price and collaborator count.

use dioxus::prelude::*;
use invite_core::{PlanLabel, PlanSummary};

use crate::components::HelpIcon;

#[component]
pub fn PlanFooter(summary: PlanSummary, label: PlanLabel, tooltip: String) -> Element {
    let label_text = label.as_str();

    rsx! {
        div {
            class: "plan",

            div {
                class: "plan-heading",
                h3 { class: "plan-label", "{label_text}" }
                span {
                    class: "plan-help",
                    title: "{tooltip}",
                    HelpIcon {}
                }
            }

            div {
                class: "plan-totals",
                div { class: "plan-price", "${summary.total_price}/mo" }
                div { class: "plan-collaborators", "{summary.total_collaborators} collaborators" }
            }
        }
    }
}
