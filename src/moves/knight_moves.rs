use crate::game_state::chess_types::Square;
use crate::moves::piece_rules::deltas;

/// `(|d_row|, |d_col|)` is `(1, 2)` or `(2, 1)`.
#[inline]
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}
