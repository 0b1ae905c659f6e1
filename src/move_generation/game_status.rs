//! Terminal-condition predicates.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{find_king, is_in_check};
use crate::move_generation::legal_move_validation::has_any_valid_move;

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate(Color),
    Stalemate(Color),
    InsufficientMaterial,
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_any_valid_move(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_any_valid_move(board, color)
}

/// Draw by insufficient material.
///
/// Both kings must be present with no pawns, rooks or queens, and the minor
/// pieces must be one of: none at all; exactly one knight; exactly one
/// bishop; or one bishop per side standing on the same square color.
pub fn is_insufficient_material(grid: &Grid) -> bool {
    if find_king(grid, Color::White).is_none() || find_king(grid, Color::Black).is_none() {
        return false;
    }

    let mut knights = 0usize;
    let mut bishops: [Vec<Square>; 2] = [Vec::new(), Vec::new()];

    for (square, piece) in grid.pieces() {
        match piece.kind {
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => knights += 1,
            PieceKind::Bishop => bishops[piece.color.index()].push(square),
            PieceKind::King => {}
        }
    }

    let [white_bishops, black_bishops] = &bishops;
    let total_bishops = white_bishops.len() + black_bishops.len();

    match (knights, total_bishops) {
        (0, 0) | (1, 0) | (0, 1) => true,
        (0, 2) if white_bishops.len() == 1 && black_bishops.len() == 1 => {
            white_bishops[0].is_light() == black_bishops[0].is_light()
        }
        _ => false,
    }
}

/// Evaluate the position for the side to move.
pub fn evaluate_status(board: &Board) -> GameStatus {
    let side = board.side_to_move;
    let in_check = is_in_check(board, side);
    let can_move = has_any_valid_move(board, side);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate(side),
        (false, false) => GameStatus::Stalemate(side),
        _ if is_insufficient_material(&board.grid) => GameStatus::InsufficientMaterial,
        (true, true) => GameStatus::Check(side),
        (false, true) => GameStatus::InProgress,
    }
}
