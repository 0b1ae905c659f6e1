use crate::game_state::chess_types::Square;
use crate::moves::piece_rules::deltas;

/// One square in any direction.
#[inline]
pub fn is_king_step(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    from != to && d_row.abs() <= 1 && d_col.abs() <= 1
}

/// A king step, or an unmoved king shifting two files along its rank.
#[inline]
pub fn is_king_move(has_moved: bool, from: Square, to: Square) -> bool {
    is_king_step(from, to) || (!has_moved && is_castling_shape(from, to))
}

#[inline]
pub fn is_castling_shape(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row == 0 && d_col.abs() == 2
}
