//! UI components for invite-dioxus.
//!
//! Components are organized into the dialog shell, the invite modal and a
//! few shared primitives.

// Subdirectory modules
mod dialog;
mod invite;

// Shared primitives
mod icons;
mod modal_overlay;

pub use dialog::DialogShell;
pub(crate) use dialog::notify_open_change;
pub use icons::{CloseIcon, HelpIcon, MinusIcon};
pub use invite::{EmailRowInput, InviteModal, InvitedList, PlanFooter};
pub use modal_overlay::ModalOverlay;
