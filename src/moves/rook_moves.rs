use crate::game_state::chess_types::{Grid, Square};
use crate::moves::piece_rules::is_path_clear;

#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    from != to && (from.row == to.row || from.col == to.col)
}

pub fn is_rook_move(from: Square, to: Square, grid: &Grid) -> bool {
    is_orthogonal(from, to) && is_path_clear(from, to, grid)
}
