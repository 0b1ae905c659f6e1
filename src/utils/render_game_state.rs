//! Terminal board renderer.
//!
//! The glyph set is chosen by an explicit `PieceStyle` argument; the board
//! itself carries no presentation state.

use std::str::FromStr;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{file_char, rank_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceStyle {
    /// Outline glyphs for White, filled glyphs for Black.
    #[default]
    UnicodeSymbols,
    /// Colors swapped, for terminals with a dark background.
    UnicodeAlternate,
    /// ASCII letters: upper case White, lower case Black.
    TextBased,
}

impl FromStr for PieceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unicode" | "symbols" => Ok(PieceStyle::UnicodeSymbols),
            "alternate" => Ok(PieceStyle::UnicodeAlternate),
            "text" | "ascii" => Ok(PieceStyle::TextBased),
            other => Err(format!("unknown piece style \"{other}\"")),
        }
    }
}

/// Render ranks 8 to 1 with file labels above and below.
pub fn render_board(board: &Board, style: PieceStyle) -> String {
    let mut out = String::new();
    let files: String = (0..8u8)
        .map(|col| format!(" {}", file_char(col)))
        .collect();

    out.push(' ');
    out.push_str(&files);
    out.push('\n');

    for row in 0..8u8 {
        out.push(rank_char(row));
        for col in 0..8u8 {
            out.push(' ');
            out.push(square_glyph(board.get_piece(Square::new(row, col)), style));
        }
        out.push(' ');
        out.push(rank_char(row));
        out.push('\n');
    }

    out.push(' ');
    out.push_str(&files);

    out
}

fn square_glyph(piece: Option<Piece>, style: PieceStyle) -> char {
    let Some(piece) = piece else {
        return match style {
            PieceStyle::TextBased => '.',
            _ => '·',
        };
    };

    match style {
        PieceStyle::UnicodeSymbols => outline_or_filled(piece.kind, piece.color),
        PieceStyle::UnicodeAlternate => outline_or_filled(piece.kind, piece.color.opposite()),
        PieceStyle::TextBased => crate::utils::fen_generator::piece_to_fen_char(piece),
    }
}

fn outline_or_filled(kind: PieceKind, color: Color) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
