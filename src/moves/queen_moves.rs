use crate::game_state::chess_types::{Grid, Square};
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::rook_moves::is_rook_move;

pub fn is_queen_move(from: Square, to: Square, grid: &Grid) -> bool {
    is_rook_move(from, to, grid) || is_bishop_move(from, to, grid)
}
