//! Append-only move log with an independent cursor.
//!
//! The cursor is the index of the last applied record, or `None` before the
//! first move. Appending while the cursor is behind the end discards the
//! abandoned future first.

use crate::game_state::move_record::MoveRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
    cursor: Option<usize>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` after the cursor and move the cursor onto it.
    pub fn push(&mut self, record: MoveRecord) {
        self.truncate_after_cursor();
        self.records.push(record);
        self.cursor = Some(self.records.len() - 1);
    }

    /// Drop every record after the cursor.
    pub fn truncate_after_cursor(&mut self) {
        let keep = self.cursor.map_or(0, |index| index + 1);
        self.records.truncate(keep);
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = None;
    }

    #[inline]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// The most recent record, for the promotion back-fill.
    #[inline]
    pub(crate) fn last_mut(&mut self) -> Option<&mut MoveRecord> {
        self.records.last_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the cursor, clamped to the recorded range.
    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = match (cursor, self.records.len()) {
            (_, 0) | (None, _) => None,
            (Some(index), len) => Some(index.min(len - 1)),
        };
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.records.len().checked_sub(1);
    }

    #[inline]
    pub fn is_cursor_at_end(&self) -> bool {
        self.cursor == self.records.len().checked_sub(1)
    }

    pub fn notations(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.algebraic_notation.clone())
            .collect()
    }
}
