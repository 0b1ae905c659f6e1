//! FEN-to-Board parser.
//!
//! Builds a `Board` from Forsyth-Edwards Notation. The board has no castling
//! rights field, so the castling letters are folded into the `has_moved` flags
//! of the kings and rooks: a king or rook keeps `has_moved == false` only when
//! it stands on its home square and a matching letter is present. Pawns off
//! their starting rank are marked moved so they lose the double step.
//!
//! The halfmove and fullmove counters are optional and, when present, only
//! validated.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_START_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingLetters {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingLetters {
    fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }
}

pub fn parse_fen(fen: &str) -> Result<Board, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| missing_field("piece placement"))?;
    let side_part = parts.next().ok_or_else(|| missing_field("side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for counter in parts.by_ref().take(2) {
        if counter.parse::<u16>().is_err() {
            return Err(ChessErrors::InvalidFenStringForm(format!(
                "invalid move counter \"{counter}\""
            )));
        }
    }
    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFenStringForm(
            "FEN has extra trailing fields".to_owned(),
        ));
    }

    let mut board = Board::new_empty();
    parse_board(board_part, &mut board.grid)?;
    board.side_to_move = parse_side_to_move(side_part)?;
    let castling = parse_castling_letters(castling_part)?;
    board.en_passant_target = parse_en_passant_square(en_passant_part)?;
    if let Some(target) = board.en_passant_target {
        check_en_passant_target(&board.grid, board.side_to_move, target)?;
    }

    derive_moved_flags(&mut board.grid, castling);

    Ok(board)
}

fn missing_field(name: &str) -> ChessErrors {
    ChessErrors::InvalidFenStringForm(format!("missing {name} field"))
}

fn parse_board(board_part: &str, grid: &mut Grid) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenStringForm(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(too_many_files(row));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if col >= 8 {
                return Err(too_many_files(row));
            }

            grid.set(Square::new(row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidFenStringForm(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(())
}

fn too_many_files(row: usize) -> ChessErrors {
    ChessErrors::InvalidFenStringForm(format!("rank {} has too many files", 8 - row))
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFenStringForm(format!(
            "invalid side to move \"{side_part}\""
        ))),
    }
}

fn parse_castling_letters(castling_part: &str) -> Result<CastlingLetters, ChessErrors> {
    let mut letters = CastlingLetters::default();
    if castling_part == "-" {
        return Ok(letters);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => letters.white_kingside = true,
            'Q' => letters.white_queenside = true,
            'k' => letters.black_kingside = true,
            'q' => letters.black_queenside = true,
            _ => return Err(ChessErrors::InvalidFenToken(ch)),
        }
    }

    Ok(letters)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    algebraic_to_square(en_passant_part).map(Some)
}

/// The target must be the empty square a pawn of the side that just moved
/// skipped over, with that pawn standing one rank beyond it.
fn check_en_passant_target(grid: &Grid, side_to_move: Color, target: Square) -> Result<(), ChessErrors> {
    let mover = side_to_move.opposite();
    let skipped_row = mover.pawn_start_row() as i8 + mover.pawn_direction();
    let double_stepped = target
        .offset(mover.pawn_direction(), 0)
        .and_then(|square| grid.get(square))
        .is_some_and(|piece| piece.is(PieceKind::Pawn, mover));

    if target.row as i8 == skipped_row && grid.is_empty(target) && double_stepped {
        return Ok(());
    }
    Err(ChessErrors::InvalidFenStringForm(format!(
        "en passant square \"{}\" has no pawn that just double-stepped",
        en_passant_name(target)
    )))
}

fn en_passant_name(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|| "?".to_owned())
}

fn derive_moved_flags(grid: &mut Grid, castling: CastlingLetters) {
    let placed: Vec<(Square, Piece)> = grid.pieces().collect();

    for (square, piece) in placed {
        let home = piece.color.home_row();
        let unmoved = match piece.kind {
            PieceKind::Pawn => square.row == piece.color.pawn_start_row(),
            PieceKind::King => {
                square == Square::new(home, KING_START_COL)
                    && (castling.kingside(piece.color) || castling.queenside(piece.color))
            }
            PieceKind::Rook => {
                (square == Square::new(home, KINGSIDE_ROOK_COL)
                    && castling.kingside(piece.color))
                    || (square == Square::new(home, QUEENSIDE_ROOK_COL)
                        && castling.queenside(piece.color))
            }
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
        };

        if !unmoved {
            grid.set(square, Some(piece.moved()));
        }
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_fen_matches_new_game() {
        let board = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(board, Board::new_game());
    }

    #[test]
    fn side_and_en_passant_fields_are_honoured() {
        let board = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2")
            .expect("FEN should parse");
        assert_eq!(board.side_to_move, Color::White);
        assert_eq!(board.en_passant_target, Some(Square::new(2, 4)));

        let moved_pawn = board.get_piece(Square::new(4, 4)).expect("e4 should hold a pawn");
        assert!(moved_pawn.has_moved);
        let home_pawn = board.get_piece(Square::new(6, 3)).expect("d2 should hold a pawn");
        assert!(!home_pawn.has_moved);
    }

    #[test]
    fn castling_letters_drive_king_and_rook_flags() {
        let board = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1").expect("FEN should parse");
        let flag = |row, col| {
            board
                .get_piece(Square::new(row, col))
                .map(|piece| piece.has_moved)
                .expect("square should be occupied")
        };

        assert!(!flag(7, 4), "white king keeps K");
        assert!(!flag(7, 7), "h1 rook keeps K");
        assert!(flag(7, 0), "a1 rook lost Q");
        assert!(!flag(0, 4), "black king keeps q");
        assert!(!flag(0, 0), "a8 rook keeps q");
        assert!(flag(0, 7), "h8 rook lost k");
    }

    #[test]
    fn counters_are_optional_and_kings_are_not_required() {
        let board = parse_fen("8/8/8/8/8/8/8/4K3 w").expect("short FEN should parse");
        assert_eq!(board.grid.pieces().count(), 1);
        assert!(board.get_piece(Square::new(7, 4)).is_some_and(|king| king.has_moved));
    }

    #[test]
    fn malformed_fen_is_rejected() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFenStringForm(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(ChessErrors::InvalidFenToken('X'))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(ChessErrors::InvalidFenStringForm(_))
        ));
        assert!(parse_fen("8/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/4K3 w - - zero 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1 extra").is_err());
        assert!(parse_fen("").is_err());

        let long_rank = format!("{}/8/8/8/8/8/8/4K2k w - - 0 1", "8".repeat(40));
        assert!(matches!(
            parse_fen(&long_rank),
            Err(ChessErrors::InvalidFenStringForm(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/K8 w - - 0 1"),
            Err(ChessErrors::InvalidFenStringForm(_))
        ));
    }

    #[test]
    fn en_passant_square_must_follow_a_double_step() {
        // Own piece on the victim square, wrong rank for the side to move.
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/3NP3/4K3 w - d3 0 1"),
            Err(ChessErrors::InvalidFenStringForm(_))
        ));
        // Right rank but no enemy pawn in front of the square.
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - d6 0 1").is_err());
        // Occupied target.
        assert!(parse_fen("4k3/8/3n4/3p4/8/8/8/4K3 w - d6 0 1").is_err());
        // Black to move after a White double step.
        let board = parse_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").expect("FEN should parse");
        assert_eq!(board.en_passant_target, Some(Square::new(5, 3)));
    }
}
