//! Board state: piece placement plus the turn and en-passant flags.
//!
//! `Board` exposes placement queries and raw mutation only. Legality lives in
//! `move_generation`, and the gameplay entry point is `ChessGame::move_piece`.

use crate::game_state::chess_rules::{piece_value, BACK_RANK};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub grid: Grid,
    pub side_to_move: Color,
    /// Square skipped by the immediately preceding pawn double-step.
    pub en_passant_target: Option<Square>,
    /// Captured White pieces, in capture order.
    pub captured_white: Vec<Piece>,
    /// Captured Black pieces, in capture order.
    pub captured_black: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Empty board with White to move.
    pub fn new_empty() -> Self {
        Self {
            grid: Grid::empty(),
            side_to_move: Color::White,
            en_passant_target: None,
            captured_white: Vec::new(),
            captured_black: Vec::new(),
        }
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.initialize_board();
        board
    }

    /// Reset to the standard starting position, clearing captures and flags.
    pub fn initialize_board(&mut self) {
        self.grid = Grid::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                self.grid
                    .set(Square::new(color.home_row(), col), Some(Piece::new(*kind, color)));
                self.grid.set(
                    Square::new(color.pawn_start_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        self.side_to_move = Color::White;
        self.en_passant_target = None;
        self.captured_white.clear();
        self.captured_black.clear();
    }

    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.grid.get(square)
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.grid.set(square, piece);
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn switch_player(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Record a captured piece in its owner's list.
    pub fn record_capture(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.captured_white.push(piece),
            Color::Black => self.captured_black.push(piece),
        }
    }

    /// Captured pieces belonging to `color`.
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.captured_white,
            Color::Black => &self.captured_black,
        }
    }

    /// Total material value of captured pieces belonging to `color`.
    pub fn captured_material(&self, color: Color) -> u32 {
        self.captured_pieces(color)
            .iter()
            .map(|piece| piece_value(piece.kind))
            .sum()
    }
}
