//! Dynamic list of email entry rows.
//!
//! The list is never empty. Its last row is the trailing "add more" slot:
//! typing the first character into it appends a fresh empty row, and it is
//! never removed on blur. Empty rows elsewhere are dropped when they lose
//! focus or when Enter/Backspace is pressed in them.

use std::fmt;

/// Opaque identifier of a row, stable for the row's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One editable email slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRow {
    id: RowId,
    value: String,
}

impl EmailRow {
    #[must_use]
    pub fn id(&self) -> RowId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Keys that act as "delete this empty row and step back".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    Enter,
    Backspace,
}

/// Result of [`EmailRows::key_shortcut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Nothing happened; the key keeps its default effect.
    Ignored,
    /// The row was removed. `focus` is the row that preceded it, if any.
    Removed { focus: Option<RowId> },
}

impl ShortcutOutcome {
    /// Whether the host should suppress the key's default action.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Removed { .. })
    }
}

/// Ordered sequence of email rows.
#[derive(Debug, Clone)]
pub struct EmailRows {
    rows: Vec<EmailRow>,
    next_id: u64,
}

impl Default for EmailRows {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailRows {
    /// Create a list holding a single empty row.
    #[must_use]
    pub fn new() -> Self {
        let mut rows = Self {
            rows: Vec::with_capacity(4),
            next_id: 1,
        };
        rows.push_empty();
        rows
    }

    fn mint_id(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push_empty(&mut self) -> RowId {
        let id = self.mint_id();
        self.rows.push(EmailRow {
            id,
            value: String::new(),
        });
        id
    }

    /// Replace the value of the row `id`.
    ///
    /// When the edited row is the last one and the new value is exactly one
    /// character long, a fresh empty row is appended. Unknown ids are ignored.
    pub fn change_value(&mut self, id: RowId, value: impl Into<String>) {
        let Some(index) = self.position(id) else {
            tracing::trace!(%id, "change_value on unknown row");
            return;
        };
        let value = value.into();
        let grows = index + 1 == self.rows.len() && value.chars().count() == 1;

        if let Some(row) = self.rows.get_mut(index) {
            row.value = value;
        }

        if grows {
            let new_id = self.push_empty();
            tracing::debug!(%id, %new_id, "trailing row filled, appended empty row");
        }
    }

    /// Focus left the row `id`: drop it if it is empty and not the last row.
    pub fn blur(&mut self, id: RowId) {
        let Some(index) = self.position(id) else {
            return;
        };
        let is_last = index + 1 == self.rows.len();
        let is_empty = self.rows.get(index).is_some_and(EmailRow::is_empty);

        if is_empty && !is_last {
            self.rows.remove(index);
            tracing::debug!(%id, "removed empty row on blur");
        }
    }

    /// Remove the row `id` unconditionally.
    ///
    /// If the list would become empty, a fresh empty row takes its place.
    pub fn remove(&mut self, id: RowId) {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        if self.rows.len() == before {
            return;
        }

        tracing::debug!(%id, "removed row");
        if self.rows.is_empty() {
            self.push_empty();
        }
    }

    /// Handle Enter/Backspace pressed in the row `id`.
    ///
    /// Only an empty row that is not the trailing row is affected: it is
    /// removed and the preceding row (if any) is reported as the new focus
    /// target.
    pub fn key_shortcut(&mut self, id: RowId, key: RowKey) -> ShortcutOutcome {
        let Some(index) = self.position(id) else {
            return ShortcutOutcome::Ignored;
        };
        if index + 1 == self.rows.len() {
            return ShortcutOutcome::Ignored;
        }
        if !self.rows.get(index).is_some_and(EmailRow::is_empty) {
            return ShortcutOutcome::Ignored;
        }

        let focus = index
            .checked_sub(1)
            .and_then(|prev| self.rows.get(prev))
            .map(EmailRow::id);

        tracing::debug!(%id, ?key, ?focus, "key shortcut removes empty row");
        self.remove(id);
        ShortcutOutcome::Removed { focus }
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmailRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: RowId) -> Option<&EmailRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    #[must_use]
    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    #[must_use]
    pub fn is_last(&self, id: RowId) -> bool {
        self.rows.last().is_some_and(|row| row.id == id)
    }

    #[must_use]
    pub fn first_id(&self) -> Option<RowId> {
        self.rows.first().map(EmailRow::id)
    }

    #[must_use]
    pub fn last_id(&self) -> Option<RowId> {
        self.rows.last().map(EmailRow::id)
    }

    /// Number of rows holding a non-empty value.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_empty()).count()
    }

    /// Non-empty values in row order.
    #[must_use]
    pub fn emails(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| row.value.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(rows: &EmailRows) -> Vec<&str> {
        rows.iter().map(EmailRow::value).collect()
    }

    fn id_at(rows: &EmailRows, index: usize) -> RowId {
        rows.iter().nth(index).expect("row exists").id()
    }

    /// Build a list with the given filled values followed by the trailing empty row.
    fn filled(entries: &[&str]) -> EmailRows {
        let mut rows = EmailRows::new();
        for entry in entries {
            let last = rows.last_id().expect("non-empty");
            let mut chars = entry.chars();
            let first = chars.next().expect("entry not empty");
            rows.change_value(last, first.to_string());
            rows.change_value(last, *entry);
        }
        rows
    }

    #[test]
    fn new_list_has_one_empty_row() {
        let rows = EmailRows::new();
        assert_eq!(values(&rows), vec![""]);
        assert_eq!(rows.filled_count(), 0);
    }

    #[test]
    fn first_character_in_trailing_row_appends_one_row() {
        let mut rows = EmailRows::new();
        let first = id_at(&rows, 0);
        rows.change_value(first, "a");
        assert_eq!(values(&rows), vec!["a", ""]);
        assert_ne!(id_at(&rows, 1), first);
    }

    #[test]
    fn second_character_does_not_grow_again() {
        let mut rows = EmailRows::new();
        let first = id_at(&rows, 0);
        rows.change_value(first, "a");
        rows.change_value(first, "ab");
        assert_eq!(values(&rows), vec!["ab", ""]);
    }

    #[test]
    fn single_char_into_non_last_row_does_not_grow() {
        let mut rows = filled(&["alice@x.io", "bob@x.io"]);
        let first = id_at(&rows, 0);
        rows.change_value(first, "a");
        assert_eq!(values(&rows), vec!["a", "bob@x.io", ""]);
    }

    #[test]
    fn pasted_value_into_trailing_row_does_not_grow() {
        let mut rows = EmailRows::new();
        let first = id_at(&rows, 0);
        rows.change_value(first, "pasted@x.io");
        assert_eq!(values(&rows), vec!["pasted@x.io"]);
    }

    #[test]
    fn multibyte_first_character_grows() {
        let mut rows = EmailRows::new();
        let first = id_at(&rows, 0);
        rows.change_value(first, "é");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn change_value_unknown_id_is_noop() {
        let mut rows = EmailRows::new();
        rows.change_value(RowId(999), "a");
        assert_eq!(values(&rows), vec![""]);
    }

    #[test]
    fn blur_keeps_filled_and_trailing_rows() {
        let mut rows = filled(&["a"]);
        rows.blur(id_at(&rows, 0));
        rows.blur(id_at(&rows, 1));
        assert_eq!(values(&rows), vec!["a", ""]);
    }

    #[test]
    fn blur_removes_cleared_middle_row() {
        let mut rows = filled(&["a", "b"]);
        let middle = id_at(&rows, 1);
        rows.change_value(middle, "");
        rows.blur(middle);
        assert_eq!(values(&rows), vec!["a", ""]);
        assert!(rows.get(middle).is_none());
    }

    #[test]
    fn remove_last_remaining_row_creates_fresh_one() {
        let mut rows = EmailRows::new();
        let only = id_at(&rows, 0);
        rows.remove(only);
        assert_eq!(values(&rows), vec![""]);
        assert_ne!(id_at(&rows, 0), only);
    }

    #[test]
    fn remove_filled_row() {
        let mut rows = filled(&["a", "b"]);
        rows.remove(id_at(&rows, 0));
        assert_eq!(values(&rows), vec!["b", ""]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut rows = filled(&["a"]);
        rows.remove(RowId(999));
        assert_eq!(values(&rows), vec!["a", ""]);
    }

    #[test]
    fn backspace_on_cleared_middle_row_focuses_previous() {
        let mut rows = filled(&["a", "b"]);
        let first = id_at(&rows, 0);
        let middle = id_at(&rows, 1);
        rows.change_value(middle, "");

        let outcome = rows.key_shortcut(middle, RowKey::Backspace);

        assert_eq!(outcome, ShortcutOutcome::Removed { focus: Some(first) });
        assert!(outcome.prevents_default());
        assert_eq!(values(&rows), vec!["a", ""]);
    }

    #[test]
    fn enter_on_cleared_first_row_leaves_focus_unmoved() {
        let mut rows = filled(&["a", "b"]);
        let first = id_at(&rows, 0);
        rows.change_value(first, "");

        let outcome = rows.key_shortcut(first, RowKey::Enter);

        assert_eq!(outcome, ShortcutOutcome::Removed { focus: None });
        assert_eq!(values(&rows), vec!["b", ""]);
    }

    #[test]
    fn shortcut_on_trailing_row_is_ignored() {
        let mut rows = filled(&["a"]);
        let trailing = id_at(&rows, 1);
        let outcome = rows.key_shortcut(trailing, RowKey::Backspace);
        assert_eq!(outcome, ShortcutOutcome::Ignored);
        assert!(!outcome.prevents_default());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn shortcut_on_filled_row_is_ignored() {
        let mut rows = filled(&["a", "b"]);
        let outcome = rows.key_shortcut(id_at(&rows, 1), RowKey::Backspace);
        assert_eq!(outcome, ShortcutOutcome::Ignored);
        assert_eq!(values(&rows), vec!["a", "b", ""]);
    }

    #[test]
    fn emails_skip_empty_rows() {
        let rows = filled(&["a@x.io", "b@x.io"]);
        assert_eq!(rows.emails(), vec!["a@x.io".to_string(), "b@x.io".to_string()]);
        assert_eq!(rows.filled_count(), 2);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut rows = EmailRows::new();
        let first = id_at(&rows, 0);
        rows.remove(first);
        rows.remove(id_at(&rows, 0));
        assert!(id_at(&rows, 0).get() > first.get() + 1);
    }
}
