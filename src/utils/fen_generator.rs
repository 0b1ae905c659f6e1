//! Board-to-FEN encoder for the external move-suggestion process.
//!
//! Castling letters are derived from the `has_moved` flags of the kings and
//! of the rooks on their corner squares. The halfmove and fullmove counters
//! are not tracked and are always written as `0 1`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_START_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(board: &Board) -> String {
    let placement = generate_board_field(&board.grid);
    let side_to_move = match board.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(&board.grid);
    let en_passant = board
        .en_passant_target
        .and_then(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!("{placement} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(grid: &Grid) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match grid.get(Square::new(row, col)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}

fn generate_castling_field(grid: &Grid) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        let home = color.home_row();
        let king_unmoved = grid
            .get(Square::new(home, KING_START_COL))
            .is_some_and(|p| p.is(PieceKind::King, color) && !p.has_moved);
        if !king_unmoved {
            continue;
        }

        let rook_unmoved = |col| {
            grid.get(Square::new(home, col))
                .is_some_and(|p| p.is(PieceKind::Rook, color) && !p.has_moved)
        };
        let (kingside, queenside) = match color {
            Color::White => ('K', 'Q'),
            Color::Black => ('k', 'q'),
        };
        if rook_unmoved(KINGSIDE_ROOK_COL) {
            out.push(kingside);
        }
        if rook_unmoved(QUEENSIDE_ROOK_COL) {
            out.push(queenside);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
