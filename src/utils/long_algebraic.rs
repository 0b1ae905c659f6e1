//! Long algebraic (UCI) move strings such as `e2e4` or `e7e8q`.
//!
//! Used in both directions with the external move-suggestion process. The
//! decoder only checks the string shape; legality is decided when the move
//! is played.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// A decoded `(from, to, promotion)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Encode a move. `None` when either square is off the board or the
/// promotion kind is not a legal promotion choice.
pub fn move_to_uci(from: Square, to: Square, promotion: Option<PieceKind>) -> Option<String> {
    let mut out = square_to_algebraic(from)?;
    out.push_str(&square_to_algebraic(to)?);

    if let Some(kind) = promotion {
        out.push(promotion_to_char(kind)?);
    }

    Some(out)
}

pub fn uci_to_move(long_algebraic: &str) -> Result<UciMove, ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(UciMove {
        from,
        to,
        promotion,
    })
}

fn promotion_to_char(kind: PieceKind) -> Option<char> {
    kind.is_promotion_choice()
        .then(|| kind.letter().to_ascii_lowercase())
}

fn char_to_promotion(ch: char) -> Result<PieceKind, ChessErrors> {
    PieceKind::from_letter(ch)
        .filter(|kind| kind.is_promotion_choice())
        .ok_or(ChessErrors::InvalidAlgebraicChar(ch))
}
