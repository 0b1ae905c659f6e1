use crate::game_state::chess_types::{Grid, Square};
use crate::moves::piece_rules::{deltas, is_path_clear};

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row != 0 && d_row.abs() == d_col.abs()
}

pub fn is_bishop_move(from: Square, to: Square, grid: &Grid) -> bool {
    is_diagonal(from, to) && is_path_clear(from, to, grid)
}
