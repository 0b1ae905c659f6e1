//! Transport tuple for a committed move.
//!
//! A peer encodes a move as `(from_row, from_col, to_row, to_col, promotion)`
//! and replays it on its own game through the same calls a local player makes.
//! Promotion codes follow the piece-type ordering used on the wire:
//! `0` none, `1` pawn, `2` rook, `3` knight, `4` bishop, `5` queen, `6` king.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::move_record::MoveRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoteMove {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
    pub promotion: u8,
}

impl RemoteMove {
    pub fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        Self {
            from_row: from.row,
            from_col: from.col,
            to_row: to.row,
            to_col: to.col,
            promotion: promotion_code(promotion),
        }
    }

    pub fn from_record(record: &MoveRecord) -> Self {
        Self::new(record.from, record.to, record.promotion)
    }

    #[inline]
    pub fn from_square(&self) -> Square {
        Square::new(self.from_row, self.from_col)
    }

    #[inline]
    pub fn to_square(&self) -> Square {
        Square::new(self.to_row, self.to_col)
    }

    /// Decoded promotion kind, rejecting unknown codes.
    pub fn promotion_kind(&self) -> Result<Option<PieceKind>, ChessErrors> {
        promotion_from_code(self.promotion)
    }

    /// Both squares on the board and a known promotion code.
    pub fn validate(&self) -> Result<(), ChessErrors> {
        for square in [self.from_square(), self.to_square()] {
            if !square.is_on_board() {
                return Err(ChessErrors::IllegalMove(format!(
                    "square ({}, {}) is off the board",
                    square.row, square.col
                )));
            }
        }
        self.promotion_kind().map(|_| ())
    }
}

pub fn promotion_code(kind: Option<PieceKind>) -> u8 {
    match kind {
        None => 0,
        Some(PieceKind::Pawn) => 1,
        Some(PieceKind::Rook) => 2,
        Some(PieceKind::Knight) => 3,
        Some(PieceKind::Bishop) => 4,
        Some(PieceKind::Queen) => 5,
        Some(PieceKind::King) => 6,
    }
}

pub fn promotion_from_code(code: u8) -> Result<Option<PieceKind>, ChessErrors> {
    match code {
        0 => Ok(None),
        1 => Ok(Some(PieceKind::Pawn)),
        2 => Ok(Some(PieceKind::Rook)),
        3 => Ok(Some(PieceKind::Knight)),
        4 => Ok(Some(PieceKind::Bishop)),
        5 => Ok(Some(PieceKind::Queen)),
        6 => Ok(Some(PieceKind::King)),
        _ => Err(ChessErrors::InvalidPromotionCode(code)),
    }
}
