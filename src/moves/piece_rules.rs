//! Piece Rule Set dispatcher.
//!
//! Answers "can this piece geometrically go from `from` to `to` on this
//! grid", ignoring whether the move exposes the mover's own king. Pure
//! functions of their inputs.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::is_bishop_move;
use crate::moves::king_moves::{is_king_move, is_king_step};
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::{is_pawn_capture_geometry, is_pawn_move};
use crate::moves::queen_moves::is_queen_move;
use crate::moves::rook_moves::is_rook_move;

/// Geometric legality of `piece` moving `from` -> `to`.
///
/// Same-color destinations are rejected before the per-kind rule runs. A king
/// moving two files on its rank passes here when unmoved; full castling
/// legality is decided by `special_moves::can_castle`.
pub fn is_geometric_move(
    piece: Piece,
    from: Square,
    to: Square,
    grid: &Grid,
    en_passant_target: Option<Square>,
) -> bool {
    if !from.is_on_board() || !to.is_on_board() || from == to {
        return false;
    }
    if let Some(target) = grid.get(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_pawn_move(piece.color, piece.has_moved, from, to, grid, en_passant_target),
        PieceKind::Knight => is_knight_move(from, to),
        PieceKind::Bishop => is_bishop_move(from, to, grid),
        PieceKind::Rook => is_rook_move(from, to, grid),
        PieceKind::Queen => is_queen_move(from, to, grid),
        PieceKind::King => is_king_move(piece.has_moved, from, to),
    }
}

/// Whether `piece` standing on `from` attacks `target`.
///
/// Same as [`is_geometric_move`] except that pawns only count diagonal
/// captures and kings never count the two-file castling step, since neither
/// forward pawn pushes nor castling can capture.
pub fn reaches_square(piece: Piece, from: Square, target: Square, grid: &Grid) -> bool {
    if !from.is_on_board() || !target.is_on_board() || from == target {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => is_pawn_capture_geometry(piece.color, from, target),
        PieceKind::King => is_king_step(from, target),
        _ => is_geometric_move(piece, from, target, grid, None),
    }
}

/// Signed row/column deltas from `from` to `to`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row as i8 - from.row as i8,
        to.col as i8 - from.col as i8,
    )
}

/// Walk unit steps from `from` toward `to`, failing on any occupied square
/// strictly between them. The destination itself is not inspected.
///
/// Callers must only pass straight or diagonal lines.
pub fn is_path_clear(from: Square, to: Square, grid: &Grid) -> bool {
    let (d_row, d_col) = deltas(from, to);
    let step = (d_row.signum(), d_col.signum());

    let mut current = from;
    loop {
        let Some(next) = current.offset(step.0, step.1) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !grid.is_empty(next) {
            return false;
        }
        current = next;
    }
}
