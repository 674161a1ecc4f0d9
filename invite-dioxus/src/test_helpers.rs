//! Test helpers for invite context tests.
//!
//! Provides builders for an `InviteContext` and shorthands to type into rows
//! the way the input element reports it (the whole value on every keystroke).

use std::sync::Arc;

use invite_core::{InviteSender, RowId, SubmitError};
use parking_lot::Mutex;

use crate::config::InviteConfig;
use crate::state::{InviteCommand, InviteContext, SharedSender};

/// Sender that records every submitted batch.
#[derive(Default)]
pub struct RecordingSender {
    pub batches: Mutex<Vec<Vec<String>>>,
}

impl InviteSender for RecordingSender {
    fn send(&self, emails: &[String]) -> Result<(), SubmitError> {
        self.batches.lock().push(emails.to_vec());
        Ok(())
    }
}

/// Context with no invited users and default pricing.
pub fn test_context() -> InviteContext {
    let config = InviteConfig::default().with_invited(Vec::new());
    InviteContext::new(&config, Arc::new(RecordingSender::default()))
}

/// Context with the default seeded invited users.
pub fn seeded_context() -> InviteContext {
    InviteContext::new(
        &InviteConfig::default(),
        Arc::new(RecordingSender::default()),
    )
}

/// Context whose submissions land in the returned recorder.
pub fn recording_context() -> (InviteContext, Arc<RecordingSender>) {
    let recorder = Arc::new(RecordingSender::default());
    let sender: SharedSender = recorder.clone();
    let config = InviteConfig::default().with_invited(Vec::new());
    (InviteContext::new(&config, sender), recorder)
}

/// Id of the row at `index`.
pub fn row_id(ctx: &InviteContext, index: usize) -> RowId {
    ctx.form()
        .rows()
        .iter()
        .nth(index)
        .unwrap_or_else(|| panic!("no row at index {index}"))
        .id()
}

/// Current row values in order.
pub fn row_values(ctx: &InviteContext) -> Vec<String> {
    ctx.form()
        .rows()
        .iter()
        .map(|row| row.value().to_string())
        .collect()
}

/// Type `text` into the row at `index`, one character at a time.
pub fn type_text(ctx: &mut InviteContext, index: usize, text: &str) {
    let id = row_id(ctx, index);
    let mut value = ctx
        .form()
        .rows()
        .get(id)
        .map(|row| row.value().to_string())
        .unwrap_or_default();

    for ch in text.chars() {
        value.push(ch);
        ctx.apply([InviteCommand::ChangeValue {
            id,
            value: value.clone(),
        }]);
    }
}

/// Delete the whole value of the row at `index`, one character at a time.
pub fn clear_text(ctx: &mut InviteContext, index: usize) {
    let id = row_id(ctx, index);
    let mut value: Vec<char> = ctx
        .form()
        .rows()
        .get(id)
        .map(|row| row.value().chars().collect())
        .unwrap_or_default();

    while value.pop().is_some() {
        ctx.apply([InviteCommand::ChangeValue {
            id,
            value: value.iter().collect(),
        }]);
    }
}

/// Assert that the row values match `expected`.
pub fn assert_rows(ctx: &InviteContext, expected: &[&str]) {
    let actual = row_values(ctx);
    assert_eq!(
        actual, expected,
        "\n--- actual ---\n{actual:?}\n--- expected ---\n{expected:?}\n"
    );
}
