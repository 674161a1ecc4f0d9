//! The invite form state container.
//!
//! All mutation goes through the four row operations; collaborator counts
//! and the price are derived on demand so they cannot drift from the rows.

use crate::error::SubmitError;
use crate::invited::InvitedUser;
use crate::pricing::{PlanLabel, PlanSummary, Pricing};
use crate::rows::{EmailRows, RowId, RowKey, ShortcutOutcome};

/// Delivery hook for the "Send invites" action.
pub trait InviteSender {
    /// `emails` holds the non-empty row values in display order.
    fn send(&self, emails: &[String]) -> Result<(), SubmitError>;
}

impl<F> InviteSender for F
where
    F: Fn(&[String]) -> Result<(), SubmitError>,
{
    fn send(&self, emails: &[String]) -> Result<(), SubmitError> {
        self(emails)
    }
}

#[derive(Debug, Clone)]
pub struct InviteForm {
    rows: EmailRows,
    invited_users: Vec<InvitedUser>,
    pricing: Pricing,
    scrolled: bool,
}

impl InviteForm {
    #[must_use]
    pub fn new(invited_users: Vec<InvitedUser>, pricing: Pricing) -> Self {
        Self {
            rows: EmailRows::new(),
            invited_users,
            pricing,
            scrolled: false,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &EmailRows {
        &self.rows
    }

    #[must_use]
    pub fn invited_users(&self) -> &[InvitedUser] {
        &self.invited_users
    }

    #[must_use]
    pub fn pricing(&self) -> Pricing {
        self.pricing
    }

    pub fn change_value(&mut self, id: RowId, value: impl Into<String>) {
        self.rows.change_value(id, value);
    }

    pub fn blur(&mut self, id: RowId) {
        self.rows.blur(id);
    }

    pub fn remove(&mut self, id: RowId) {
        self.rows.remove(id);
    }

    pub fn key_shortcut(&mut self, id: RowId, key: RowKey) -> ShortcutOutcome {
        self.rows.key_shortcut(id, key)
    }

    /// Track the vertical scroll offset of the content area.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scrolled = offset > 0.0;
    }

    /// Whether the content is scrolled past its top.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        self.pricing
            .summarize(self.rows.filled_count(), self.invited_users.len())
    }

    #[must_use]
    pub fn plan_label(&self) -> PlanLabel {
        PlanLabel::for_row_count(self.rows.len())
    }

    /// Hand the entered emails to `sender`.
    pub fn submit(&self, sender: &dyn InviteSender) -> Result<(), SubmitError> {
        let emails = self.rows.emails();
        tracing::info!(count = emails.len(), "submitting invites");
        sender.send(&emails)
    }
}
