//! Errors returned by parsing and IO utilities.
//!
//! Rule queries and mutations on the game never fail with an error: they
//! answer `bool` or `Option` and leave the position untouched on rejection.
//! `ChessErrors` covers the fallible edges around them, namely reading FEN
//! text, decoding move strings and transport tuples, and persisting logs.

use std::fmt;

/// Unified error type for the text codecs and log persistence.
///
/// Parsing variants carry the offending token so callers can show a precise
/// message to the user. `IllegalMove` is produced only by the string and
/// tuple entry points, which have to report why a decoded move did not play.
#[derive(Debug)]
pub enum ChessErrors {
    /// A file or rank character outside `a..=h` / `1..=8`.
    InvalidAlgebraicChar(char),

    /// A square or move string of the wrong shape, e.g. `"e9"` or `"e2e"`.
    InvalidAlgebraicString(String),

    /// Unexpected character in the piece-placement, side or castling field.
    InvalidFenToken(char),

    /// FEN text whose overall structure is wrong (rank count, file count,
    /// missing fields).
    InvalidFenStringForm(String),

    /// Promotion code outside the transport tuple's `0..=6` range.
    InvalidPromotionCode(u8),

    /// A decoded move the game refused. Payload is the move text.
    IllegalMove(String),

    /// Writing the game log failed.
    Io(std::io::Error),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(ch) => {
                write!(f, "invalid algebraic character '{ch}'")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic string \"{text}\"")
            }
            ChessErrors::InvalidFenToken(ch) => write!(f, "invalid FEN token '{ch}'"),
            ChessErrors::InvalidFenStringForm(reason) => write!(f, "malformed FEN: {reason}"),
            ChessErrors::InvalidPromotionCode(code) => {
                write!(f, "invalid promotion code {code}")
            }
            ChessErrors::IllegalMove(text) => write!(f, "illegal move {text}"),
            ChessErrors::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ChessErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChessErrors::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChessErrors {
    fn from(err: std::io::Error) -> Self {
        ChessErrors::Io(err)
    }
}
