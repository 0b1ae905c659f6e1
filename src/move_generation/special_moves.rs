//! Castling, en passant and promotion rules.
//!
//! These are consulted by validation (is the special move allowed) and by
//! `legal_move_apply` (which side effects does committing it trigger).

use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_attacked, is_square_attacked};
use crate::moves::king_moves::is_castling_shape;
use crate::moves::piece_rules::deltas;

/// Rook origin and destination for a king moving `king_from -> king_to`
/// two files along its rank.
pub fn castling_rook_squares(king_from: Square, king_to: Square) -> Option<(Square, Square)> {
    if !is_castling_shape(king_from, king_to) {
        return None;
    }
    let row = king_from.row;
    if king_to.col > king_from.col {
        Some((
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, KINGSIDE_ROOK_TARGET_COL),
        ))
    } else {
        Some((
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, QUEENSIDE_ROOK_TARGET_COL),
        ))
    }
}

/// Full castling eligibility for the king on `from` moving to `to`.
///
/// Requires an unmoved king and matching unmoved rook, empty squares strictly
/// between them, and that the king is not in check now, on its square of
/// passage, or on its destination.
pub fn can_castle(board: &Board, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(king) = board.get_piece(from) else {
        return false;
    };
    if king.kind != PieceKind::King || king.has_moved {
        return false;
    }
    let Some((rook_from, _)) = castling_rook_squares(from, to) else {
        return false;
    };
    match board.get_piece(rook_from) {
        Some(rook) if rook.is(PieceKind::Rook, king.color) && !rook.has_moved => {}
        _ => return false,
    }

    let (low, high) = if rook_from.col < from.col {
        (rook_from.col, from.col)
    } else {
        (from.col, rook_from.col)
    };
    if (low + 1..high).any(|col| !board.grid.is_empty(Square::new(from.row, col))) {
        return false;
    }

    let enemy = king.color.opposite();
    if is_square_attacked(&board.grid, from, enemy) {
        return false;
    }

    let step = if to.col > from.col { 1 } else { -1 };
    let Some(passage) = from.offset(0, step) else {
        return false;
    };
    for square in [passage, to] {
        let mut scratch = board.grid;
        scratch.set(from, None);
        scratch.set(square, Some(king));
        if is_king_attacked(&scratch, king.color) {
            return false;
        }
    }

    true
}

/// Diagonal one-step pawn shape onto an empty square.
#[inline]
pub fn is_en_passant_shape(grid: &Grid, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row.abs() == 1 && d_col.abs() == 1 && grid.is_empty(to)
}

/// Square of the enemy pawn that `piece` would capture en passant by moving
/// `from -> to`. The target square alone is not enough: an enemy pawn must
/// stand beside `from` on the destination file.
pub fn en_passant_victim(
    grid: &Grid,
    piece: Piece,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Option<Square> {
    if piece.kind != PieceKind::Pawn
        || en_passant_target != Some(to)
        || !is_en_passant_shape(grid, from, to)
    {
        return None;
    }
    let victim = en_passant_victim_square(from, to);
    grid.get(victim)
        .is_some_and(|captured| captured.is(PieceKind::Pawn, piece.color.opposite()))
        .then_some(victim)
}

/// Whether `from -> to` is an en-passant capture on the current board.
pub fn is_en_passant_capture(board: &Board, from: Square, to: Square) -> bool {
    board.get_piece(from).is_some_and(|piece| {
        en_passant_victim(&board.grid, piece, from, to, board.en_passant_target).is_some()
    })
}

/// Square of the pawn removed by an en-passant capture: one rank behind the
/// destination, relative to the capturing pawn's direction.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    Square::new(from.row, to.col)
}

/// Skipped square when `piece` moved `from -> to` as a pawn double-step.
pub fn double_step_target(piece: Piece, from: Square, to: Square) -> Option<Square> {
    if piece.kind != PieceKind::Pawn {
        return None;
    }
    let (d_row, d_col) = deltas(from, to);
    if d_col == 0 && d_row == 2 * piece.color.pawn_direction() {
        from.offset(piece.color.pawn_direction(), 0)
    } else {
        None
    }
}

/// A pawn stands on the last rank for its color.
pub fn needs_promotion(board: &Board, square: Square) -> bool {
    board
        .get_piece(square)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && square.row == piece.color.promotion_row())
}
