//! Replay view state.
//!
//! Replay never undoes moves. Every navigation step rebuilds the displayed
//! position from the game's initial board by re-applying stored records, so
//! the result depends only on the records and the target index.

use crate::game_state::board::Board;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::apply_record;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplayState {
    #[default]
    Live,
    /// Browsing history. `snapshot` is the live board taken on entry.
    Replay { snapshot: Box<Board> },
}

impl ReplayState {
    #[inline]
    pub fn is_replay(&self) -> bool {
        matches!(self, ReplayState::Replay { .. })
    }
}

/// Clamp a requested replay index into `-1..=len-1`, where `-1` is the
/// initial position. `None` stands for the initial position.
pub fn clamp_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 || len == 0 {
        return None;
    }
    Some((index as usize).min(len - 1))
}

/// Board after re-applying `records[..=index]` to `initial`.
pub fn rebuild_to(initial: &Board, records: &[MoveRecord], index: Option<usize>) -> Board {
    let mut board = initial.clone();
    let count = index.map_or(0, |index| (index + 1).min(records.len()));
    for record in &records[..count] {
        apply_record(&mut board, record);
    }
    board
}
