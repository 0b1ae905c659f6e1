//! Square names in file+rank form.
//!
//! Row `r` is rank `8 - r` and column `c` is file `a + c`, so `Square::new(7, 4)`
//! is `e1` and `Square::new(0, 0)` is `a8`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a coordinate such as `"e4"` to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to its coordinate name. Off-board squares have no name.
#[inline]
pub fn square_to_algebraic(square: Square) -> Option<String> {
    square
        .is_on_board()
        .then(|| format!("{}{}", file_char(square.col), rank_char(square.row)))
}

#[inline]
pub fn file_char(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn rank_char(row: u8) -> char {
    char::from(b'8' - row)
}
