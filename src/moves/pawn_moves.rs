use crate::game_state::chess_types::*;
use crate::moves::piece_rules::deltas;

/// Pawn geometry: single push onto an empty square, double push from the
/// start row when unmoved and both squares are empty, diagonal capture onto
/// an enemy piece or onto the en-passant target.
pub fn is_pawn_move(
    color: Color,
    has_moved: bool,
    from: Square,
    to: Square,
    grid: &Grid,
    en_passant_target: Option<Square>,
) -> bool {
    let direction = color.pawn_direction();
    let (d_row, d_col) = deltas(from, to);

    if d_col == 0 {
        if !grid.is_empty(to) {
            return false;
        }
        if d_row == direction {
            return true;
        }
        if d_row == 2 * direction && !has_moved && from.row == color.pawn_start_row() {
            return from
                .offset(direction, 0)
                .is_some_and(|middle| grid.is_empty(middle));
        }
        return false;
    }

    if is_pawn_capture_geometry(color, from, to) {
        let enemy_on_target = grid.get(to).is_some_and(|piece| piece.color != color);
        let en_passant = en_passant_target == Some(to)
            && grid
                .get(Square::new(from.row, to.col))
                .is_some_and(|piece| piece.is(PieceKind::Pawn, color.opposite()));
        return enemy_on_target || en_passant;
    }

    false
}

/// One step forward and one file sideways.
#[inline]
pub fn is_pawn_capture_geometry(color: Color, from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row == color.pawn_direction() && d_col.abs() == 1
}
