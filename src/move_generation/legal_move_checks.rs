//! Check detection and the scratch-board self-check simulation.
//!
//! Every simulation copies the `Grid` by value, so concurrent or nested
//! simulations never share a mutable board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::special_moves::{castling_rook_squares, en_passant_victim};
use crate::moves::king_moves::is_castling_shape;
use crate::moves::piece_rules::reaches_square;

#[inline]
pub fn find_king(grid: &Grid, color: Color) -> Option<Square> {
    grid.pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// Whether any piece of `attacker` reaches `square`, ignoring the attacker's
/// own king safety.
pub fn is_square_attacked(grid: &Grid, square: Square, attacker: Color) -> bool {
    grid.pieces_of(attacker)
        .any(|(from, piece)| reaches_square(piece, from, square, grid))
}

/// Squares of the `attacker` pieces reaching `square`.
pub fn attackers_to_square(grid: &Grid, square: Square, attacker: Color) -> Vec<Square> {
    grid.pieces_of(attacker)
        .filter(|(from, piece)| reaches_square(*piece, *from, square, grid))
        .map(|(from, _)| from)
        .collect()
}

/// Whether `color`'s king is attacked on `grid`. A missing king counts as
/// in check.
pub fn is_king_attacked(grid: &Grid, color: Color) -> bool {
    let Some(king_sq) = find_king(grid, color) else {
        return true;
    };
    is_square_attacked(grid, king_sq, color.opposite())
}

#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_king_attacked(&board.grid, color)
}

/// Apply `from -> to` to a copy of `grid`, including the en-passant victim
/// removal and castling rook relocation, and return the copy.
pub fn simulate_move(
    grid: &Grid,
    from: Square,
    to: Square,
    en_passant_target: Option<Square>,
) -> Grid {
    let mut scratch = *grid;
    let Some(piece) = scratch.take(from) else {
        return scratch;
    };

    if let Some(victim) = en_passant_victim(&scratch, piece, from, to, en_passant_target) {
        scratch.set(victim, None);
    }

    if piece.kind == PieceKind::King && is_castling_shape(from, to) {
        if let Some((rook_from, rook_to)) = castling_rook_squares(from, to) {
            let rook = scratch.take(rook_from);
            scratch.set(rook_to, rook);
        }
    }

    scratch.set(to, Some(piece.moved()));
    scratch
}

/// Whether moving `from -> to` would leave `color`'s king attacked.
pub fn would_leave_king_in_check(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let scratch = simulate_move(&board.grid, from, to, board.en_passant_target);
    is_king_attacked(&scratch, color)
}
