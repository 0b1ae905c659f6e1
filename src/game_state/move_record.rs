use crate::game_state::chess_types::*;

/// One committed ply. Holds everything needed to re-apply the move from the
/// preceding position without re-deriving legality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// Snapshot of the mover before the move, including `has_moved`.
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub was_castling: bool,
    pub was_en_passant: bool,
    /// Back-filled once the promotion choice is made.
    pub promotion: Option<PieceKind>,
    pub prior_en_passant_target: Option<Square>,
    pub gives_check: bool,
    pub gives_checkmate: bool,
    pub algebraic_notation: String,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn mover(&self) -> Color {
        self.moved_piece.color
    }
}
