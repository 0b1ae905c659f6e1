//! Raw move commit shared by live play and replay.
//!
//! Nothing here validates legality. Live play validates first and replay
//! trusts the stored `MoveRecord`, so both paths produce the same mutation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::special_moves::{
    castling_rook_squares, double_step_target, en_passant_victim_square, is_en_passant_capture,
    needs_promotion,
};
use crate::moves::king_moves::is_castling_shape;

/// Side effects observed while committing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub moved_piece: Piece,
    pub captured: Option<Piece>,
    pub was_castling: bool,
    pub was_en_passant: bool,
    pub prior_en_passant_target: Option<Square>,
}

/// Relocate the piece on `from` to `to` and apply every side effect: capture
/// bookkeeping, en-passant victim removal, castling rook relocation,
/// `has_moved` flags, en-passant target refresh and the turn flip.
///
/// Returns `None`, leaving the board untouched, when `from` is empty.
pub fn apply_move_unchecked(board: &mut Board, from: Square, to: Square) -> Option<AppliedMove> {
    let moved_piece = board.get_piece(from)?;
    let prior_en_passant_target = board.en_passant_target;

    let was_en_passant = is_en_passant_capture(board, from, to);
    let was_castling = moved_piece.kind == PieceKind::King && is_castling_shape(from, to);

    let captured = if was_en_passant {
        board.grid.take(en_passant_victim_square(from, to))
    } else {
        board.get_piece(to)
    };
    if let Some(piece) = captured {
        board.record_capture(piece);
    }

    board.en_passant_target = None;
    board.set_piece(from, None);
    board.set_piece(to, Some(moved_piece.moved()));

    if was_castling {
        if let Some((rook_from, rook_to)) = castling_rook_squares(from, to) {
            let rook = board.grid.take(rook_from).map(Piece::moved);
            board.set_piece(rook_to, rook);
        }
    }

    board.en_passant_target = double_step_target(moved_piece, from, to);
    board.switch_player();

    Some(AppliedMove {
        moved_piece,
        captured,
        was_castling,
        was_en_passant,
        prior_en_passant_target,
    })
}

/// Replace the pawn on `square` with `kind`. Only valid promotion choices on
/// a pawn that has reached its last rank are accepted.
pub fn apply_promotion(board: &mut Board, square: Square, kind: PieceKind) -> bool {
    if !kind.is_promotion_choice() || !needs_promotion(board, square) {
        return false;
    }
    let Some(pawn) = board.get_piece(square) else {
        return false;
    };
    board.set_piece(
        square,
        Some(Piece {
            kind,
            color: pawn.color,
            has_moved: true,
        }),
    );
    true
}

/// Re-apply a stored record, including its promotion choice.
pub fn apply_record(board: &mut Board, record: &MoveRecord) {
    if apply_move_unchecked(board, record.from, record.to).is_some() {
        if let Some(kind) = record.promotion {
            apply_promotion(board, record.to, kind);
        }
    }
}
