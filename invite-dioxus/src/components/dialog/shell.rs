//! Controlled dialog container.

use dioxus::prelude::*;

use crate::components::ModalOverlay;

/// Renders `children` in a modal overlay while `open` is true.
///
/// Holds no state of its own: pressing the backdrop calls
/// `on_open_change(false)` and the parent decides whether to close.
#[component]
pub fn DialogShell(
    #[props(default = true)] open: bool,
    #[props(default)] on_open_change: Option<EventHandler<bool>>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            class: "invite-dialog",
            on_backdrop_click: move |_| {
                notify_open_change(true, |value| {
                    if let Some(handler) = on_open_change {
                        handler.call(value);
                    }
                });
            },
            {children}
        }
    }
}

/// Report a dismissal request to the parent owning the `open` state.
///
/// Nothing is reported unless `dismiss` is set.
pub(crate) fn notify_open_change(dismiss: bool, on_open_change: impl FnOnce(bool)) {
    if dismiss {
        log::debug!("Dialog dismissal requested");
        on_open_change(false);
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::{Mutation, VirtualDom};

    use super::*;

    const BODY: &str = "invite body";

    fn renders_body(app: fn() -> Element) -> bool {
        let mut dom = VirtualDom::new(app);
        let mutations = dom.rebuild_to_vec();
        mutations
            .edits
            .iter()
            .any(|edit| matches!(edit, Mutation::CreateTextNode { value, .. } if value == BODY))
    }

    #[test]
    fn closed_shell_renders_nothing() {
        fn app() -> Element {
            rsx! {
                DialogShell { open: false, span { "{BODY}" } }
            }
        }
        assert!(!renders_body(app));
    }

    #[test]
    fn open_shell_renders_children() {
        fn app() -> Element {
            rsx! {
                DialogShell { open: true, span { "{BODY}" } }
            }
        }
        assert!(renders_body(app));
    }

    #[test]
    fn shell_is_open_by_default() {
        fn app() -> Element {
            rsx! {
                DialogShell { span { "{BODY}" } }
            }
        }
        assert!(renders_body(app));
    }

    #[test]
    fn dismissal_reports_closed() {
        let mut calls = Vec::new();
        notify_open_change(true, |value| calls.push(value));
        assert_eq!(calls, vec![false]);
    }

    #[test]
    fn no_dismissal_reports_nothing() {
        let mut calls = Vec::new();
        notify_open_change(false, |value| calls.push(value));
        assert!(calls.is_empty());
    }
}
