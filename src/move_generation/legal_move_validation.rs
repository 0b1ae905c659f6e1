//! Full move legality: piece geometry plus king safety.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::would_leave_king_in_check;
use crate::move_generation::special_moves::can_castle;
use crate::moves::king_moves::is_castling_shape;
use crate::moves::piece_rules::is_geometric_move;

/// Whether the side to move may play `from -> to`.
pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    board
        .get_piece(from)
        .is_some_and(|piece| piece.color == board.side_to_move)
        && is_valid_move_for(board, board.side_to_move, from, to)
}

/// Legality of `from -> to` for a piece of `color`, regardless of whose turn
/// it is. Used when enumerating moves for either side.
pub fn is_valid_move_for(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(piece) = board.get_piece(from) else {
        return false;
    };
    if piece.color != color {
        return false;
    }

    if piece.kind == PieceKind::King && is_castling_shape(from, to) {
        // can_castle already proves the king is safe on every square it uses.
        return can_castle(board, from, to);
    }

    is_geometric_move(piece, from, to, &board.grid, board.en_passant_target)
        && !would_leave_king_in_check(board, from, to, color)
}

/// Every destination reachable from `from` by a legal move of the side to move.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_valid_move(board, from, to))
        .collect()
}

/// Whether `color` has at least one legal move. Stops at the first one found.
pub fn has_any_valid_move(board: &Board, color: Color) -> bool {
    board.grid.pieces_of(color).any(|(from, _)| {
        Square::all().any(|to| is_valid_move_for(board, color, from, to))
    })
}

/// All legal `(from, to)` pairs for `color`.
pub fn all_valid_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    board
        .grid
        .pieces_of(color)
        .flat_map(|(from, _)| {
            Square::all()
                .filter(move |&to| is_valid_move_for(board, color, from, to))
                .map(move |to| (from, to))
        })
        .collect()
}
