//! Short algebraic notation for committed moves.
//!
//! The body of the notation is derived from the position *before* the move
//! (disambiguation needs the other pieces' legal moves there), while the
//! `+`/`#` suffix is derived from the position after it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::is_checkmate;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_validation::is_valid_move_for;
use crate::moves::king_moves::is_castling_shape;
use crate::utils::algebraic::{file_char, rank_char, square_to_algebraic};

/// Notation for `from -> to` on `before`, with the check suffix taken from
/// `after`. `promotion` adds the `=X` suffix for a completed promotion.
pub fn san_notation(
    before: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    after: &Board,
) -> String {
    let mut out = san_body(before, from, to, promotion);
    out.push_str(check_suffix(after));
    out
}

/// Notation without the check suffix. Empty when `from` is empty.
pub fn san_body(before: &Board, from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let Some(piece) = before.get_piece(from) else {
        return String::new();
    };
    let destination = square_to_algebraic(to).unwrap_or_default();

    if piece.kind == PieceKind::King && is_castling_shape(from, to) {
        return if to.col > from.col { "O-O" } else { "O-O-O" }.to_owned();
    }

    if piece.kind == PieceKind::Pawn {
        return pawn_san_body(from, to, promotion);
    }

    let mut out = String::new();
    out.push(piece.kind.letter());
    out.push_str(&disambiguation(before, piece, from, to));
    if before.get_piece(to).is_some() {
        out.push('x');
    }
    out.push_str(&destination);
    out
}

/// Pawn notation needs no board: a pawn changing file always captures,
/// en passant included.
pub fn pawn_san_body(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut out = String::new();
    if from.col != to.col {
        out.push(file_char(from.col));
        out.push('x');
    }
    out.push_str(&square_to_algebraic(to).unwrap_or_default());
    if let Some(kind) = promotion {
        out.push('=');
        out.push(kind.letter());
    }
    out
}

/// `#` if the side to move on `after` is mated, `+` if merely in check.
pub fn check_suffix(after: &Board) -> &'static str {
    let defender = after.side_to_move;
    if is_checkmate(after, defender) {
        "#"
    } else if is_in_check(after, defender) {
        "+"
    } else {
        ""
    }
}

/// File, rank or both, added until no other same-kind piece that could
/// also reach `to` shares the qualifier.
fn disambiguation(before: &Board, piece: Piece, from: Square, to: Square) -> String {
    let rivals: Vec<Square> = before
        .grid
        .pieces_of(piece.color)
        .filter(|&(square, other)| square != from && other.kind == piece.kind)
        .filter(|&(square, _)| is_valid_move_for(before, piece.color, square, to))
        .map(|(square, _)| square)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|rival| rival.col == from.col);
    let shares_rank = rivals.iter().any(|rival| rival.row == from.row);

    match (shares_file, shares_rank) {
        (false, _) => file_char(from.col).to_string(),
        (true, false) => rank_char(from.row).to_string(),
        (true, true) => format!("{}{}", file_char(from.col), rank_char(from.row)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::{apply_move_unchecked, apply_promotion};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square name should parse")
    }

    fn notation(fen: &str, from: &str, to: &str) -> String {
        let before = parse_fen(fen).expect("FEN should parse");
        let mut after = before.clone();
        apply_move_unchecked(&mut after, sq(from), sq(to)).expect("origin should be occupied");
        san_notation(&before, sq(from), sq(to), None, &after)
    }

    #[test]
    fn pawn_and_piece_moves() {
        let start = crate::game_state::chess_rules::STARTING_POSITION_FEN;
        assert_eq!(notation(start, "e2", "e4"), "e4");
        assert_eq!(notation(start, "g1", "f3"), "Nf3");
    }

    #[test]
    fn captures_name_the_pawn_file() {
        let fen = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1";
        assert_eq!(notation(fen, "e4", "d5"), "exd5");

        let ep = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1";
        assert_eq!(notation(ep, "e5", "d6"), "exd6");
    }

    #[test]
    fn castling_notation() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(notation(fen, "e1", "g1"), "O-O");
        assert_eq!(notation(fen, "e1", "c1"), "O-O-O");
    }

    #[test]
    fn disambiguates_by_file_then_rank_then_both() {
        // Knights b1 and f1 both reach d2.
        assert_eq!(notation("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "b1", "d2"), "Nbd2");
        // Rooks a1 and a5 share the file.
        assert_eq!(notation("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1", "a1", "a3"), "R1a3");
        // Queens on a1, a3 and c1 all reach b2; a1 shares a file and a rank.
        assert_eq!(notation("4k3/8/8/8/8/Q7/8/Q1Q1K3 w - - 0 1", "a1", "b2"), "Qa1b2");
    }

    #[test]
    fn pinned_rival_does_not_force_disambiguation() {
        // Both knights reach d4, but the e2 knight is pinned by the e8 rook.
        assert_eq!(notation("4r1k1/8/8/8/8/8/2N1N3/4K3 w - - 0 1", "c2", "d4"), "Nd4");
    }

    #[test]
    fn check_and_mate_suffixes() {
        assert_eq!(notation("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1", "a8"), "Ra8#");
        assert_eq!(notation("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1", "a6"), "Ra6");
        assert_eq!(notation("4k3/8/8/8/8/8/8/R5K1 w - - 0 1", "a1", "a8"), "Ra8+");
    }

    #[test]
    fn promotion_suffix_uses_the_promoted_position() {
        let before = parse_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut after = before.clone();
        apply_move_unchecked(&mut after, sq("e7"), sq("e8")).expect("e7 should hold a pawn");
        assert!(apply_promotion(&mut after, sq("e8"), PieceKind::Queen));
        assert_eq!(
            san_notation(&before, sq("e7"), sq("e8"), Some(PieceKind::Queen), &after),
            "e8=Q+"
        );
    }
}
