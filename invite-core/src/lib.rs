//! Invite core - state for the "invite collaborators" dialog
//!
//! This crate holds the framework-independent part of the dialog: the
//! dynamic list of email rows, the display-only list of invited users and
//! the price calculator. Frontends drive it with plain method calls from
//! their event handlers and render from its read accessors.
//!
//! ```
//! use invite_core::{InviteForm, Pricing};
//!
//! let mut form = InviteForm::new(Vec::new(), Pricing::default());
//! let first = form.rows().first_id().expect("never empty");
//! form.change_value(first, "a");
//! assert_eq!(form.rows().len(), 2);
//! assert_eq!(form.summary().total_price, 35);
//! ```

pub mod error;
pub mod form;
pub mod invited;
pub mod layout;
pub mod pricing;
pub mod rows;

pub use error::SubmitError;
pub use form::{InviteForm, InviteSender};
pub use invited::{seed_invited_users, InviteStatus, InvitedUser};
pub use layout::ModalLayout;
pub use pricing::{PlanLabel, PlanSummary, Pricing};
pub use rows::{EmailRow, EmailRows, RowId, RowKey, ShortcutOutcome};
