//! Data types for dialog state management.
//!
//! Shared structures passed between the invite context and the UI
//! components. Snapshots are `Clone + PartialEq` so they can be used as
//! Dioxus props.

use invite_core::{InvitedUser, PlanLabel, PlanSummary, RowId, RowKey};

/// Commands that can be applied to the invite context.
#[derive(Debug, Clone, PartialEq)]
pub enum InviteCommand {
    /// New text for a row (the whole value, as reported by the input).
    ChangeValue { id: RowId, value: String },
    /// Focus left a row.
    Blur(RowId),
    /// Clear button pressed on a row.
    Remove(RowId),
    /// Enter/Backspace in an empty, non-trailing row.
    KeyShortcut { id: RowId, key: RowKey },
    /// Vertical scroll offset of the content area.
    ScrollTo(f64),
    /// Measured scroll height of the content area.
    ContentMeasured(f64),
    /// "Send invites" pressed.
    Submit,
    /// Close button, Cancel, backdrop or Escape.
    Dismiss,
}

/// UI side effects produced by applying commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    /// Row that should receive keyboard focus.
    pub focus: Option<RowId>,
    /// The dialog asked to be closed.
    pub dismiss: bool,
}

/// Outcome of the last "Send invites" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Sent { count: usize },
    Failed(String),
}

/// Snapshot of a single email row for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    pub id: RowId,
    pub value: String,
    pub is_last: bool,
    /// The clear affordance is only offered on rows with text.
    pub show_clear: bool,
}

/// A snapshot of the dialog state for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteSnapshot {
    pub rows: Vec<RowSnapshot>,
    pub invited_users: Vec<InvitedUser>,
    pub summary: PlanSummary,
    pub plan_label: PlanLabel,
    pub pricing_tooltip: String,
    pub scrolled: bool,
    /// Clamped dialog height in pixels, `None` until the content was measured.
    pub modal_height: Option<f64>,
    pub submit_status: Option<SubmitStatus>,
}

impl InviteSnapshot {
    /// Inline style for the dialog container height.
    #[must_use]
    pub fn height_style(&self) -> String {
        match self.modal_height {
            Some(height) => format!("height: {height}px;"),
            None => "height: auto;".to_string(),
        }
    }
}
