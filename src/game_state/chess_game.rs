//! Game facade: the single entry point presentation and transport layers use.
//!
//! `ChessGame` owns the board, the initial position, the move history, the
//! replay view state and the result. Queries never mutate. The mutating
//! operations are `move_piece`, `promote_pawn`, replay navigation and the
//! result setters; each either commits one whole transition or changes
//! nothing and returns `false`.

use crate::chess_errors::ChessErrors;
use crate::game_config::GameConfig;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_result::GameResult;
use crate::game_state::move_record::MoveRecord;
use crate::history::move_history::MoveHistory;
use crate::history::replay::{clamp_index, rebuild_to, ReplayState};
use crate::move_generation::game_status::{
    evaluate_status, is_checkmate, is_insufficient_material, is_stalemate, GameStatus,
};
use crate::move_generation::legal_move_apply::{apply_move_unchecked, apply_promotion};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_validation::{is_valid_move, legal_destinations};
use crate::move_generation::special_moves::{can_castle, needs_promotion};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::game_log::GameLog;
use crate::utils::long_algebraic::uci_to_move;
use crate::utils::remote_move::RemoteMove;
use crate::utils::san_notation::{check_suffix, pawn_san_body, san_body};

#[derive(Debug, Clone)]
pub struct ChessGame {
    /// Live position, or the displayed position while replaying.
    board: Board,
    /// Position the game started from; replay rebuilds from here.
    initial_board: Board,
    history: MoveHistory,
    replay: ReplayState,
    result: GameResult,
    /// Square of a pawn waiting for its promotion choice.
    pending_promotion: Option<Square>,
    log: GameLog,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard starting position with logging enabled.
    pub fn new() -> Self {
        Self::with_board(Board::new_game(), GameLog::new(true))
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self::with_board(Board::new_game(), GameLog::new(config.logging))
    }

    /// Start from a FEN position with logging enabled. Replay rebuilds from
    /// this position.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Self::from_fen_with_config(fen, &GameConfig::default())
    }

    pub fn from_fen_with_config(fen: &str, config: &GameConfig) -> Result<Self, ChessErrors> {
        let board = parse_fen(fen)?;
        let mut game = Self::with_board(board, GameLog::new(config.logging));
        game.update_result_from_position();
        Ok(game)
    }

    fn with_board(board: Board, log: GameLog) -> Self {
        let mut game = Self {
            initial_board: board.clone(),
            board,
            history: MoveHistory::new(),
            replay: ReplayState::Live,
            result: GameResult::InProgress,
            pending_promotion: None,
            log,
        };
        let fen = generate_fen(&game.board);
        game.log.log_new_game(&fen);
        game
    }

    /// Reset to the standard starting position, discarding history, replay
    /// state and the result. The log is kept.
    pub fn initialize_board(&mut self) {
        self.board = Board::new_game();
        self.initial_board = self.board.clone();
        self.history.clear();
        self.replay = ReplayState::Live;
        self.result = GameResult::InProgress;
        self.pending_promotion = None;
        let fen = generate_fen(&self.board);
        self.log.log_new_game(&fen);
    }

    // ---- Queries ----

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live position, even while a replay position is displayed.
    pub fn live_board(&self) -> &Board {
        match &self.replay {
            ReplayState::Replay { snapshot } => snapshot,
            ReplayState::Live => &self.board,
        }
    }

    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.board.get_piece(square)
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.board.current_player()
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.board.en_passant_target
    }

    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        is_valid_move(&self.board, from, to)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, from)
    }

    pub fn can_castle(&self, from: Square, to: Square) -> bool {
        can_castle(&self.board, from, to)
    }

    pub fn needs_promotion(&self, square: Square) -> bool {
        needs_promotion(&self.board, square)
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(&self.board, color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        is_stalemate(&self.board, color)
    }

    pub fn is_insufficient_material(&self) -> bool {
        is_insufficient_material(&self.board.grid)
    }

    pub fn status(&self) -> GameStatus {
        evaluate_status(&self.board)
    }

    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        self.board.captured_pieces(color)
    }

    pub fn captured_material(&self, color: Color) -> u32 {
        self.board.captured_material(color)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(&self.board)
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn move_notation(&self, index: usize) -> Option<&str> {
        self.history
            .get(index)
            .map(|record| record.algebraic_notation.as_str())
    }

    pub fn all_move_notations(&self) -> Vec<String> {
        self.history.notations()
    }

    #[inline]
    pub fn game_result(&self) -> GameResult {
        self.result
    }

    pub fn game_result_string(&self) -> &'static str {
        self.result.as_str()
    }

    #[inline]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    #[inline]
    pub fn log_mut(&mut self) -> &mut GameLog {
        &mut self.log
    }

    // ---- Moves ----

    /// Validate and commit `from -> to` for the side to move.
    ///
    /// Rejected while replaying, once the result is decided, while a
    /// promotion is pending, and for any illegal move. A pawn reaching its
    /// last rank leaves the game waiting for `promote_pawn`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        if let Some(reason) = self.move_block_reason() {
            self.log.log_rejected_move(from, to, reason);
            return false;
        }
        if !is_valid_move(&self.board, from, to) {
            self.log.log_rejected_move(from, to, "illegal");
            return false;
        }

        let before = self.board.clone();
        let Some(applied) = apply_move_unchecked(&mut self.board, from, to) else {
            return false;
        };

        let defender = self.board.side_to_move;
        let mut notation = san_body(&before, from, to, None);
        notation.push_str(check_suffix(&self.board));

        let record = MoveRecord {
            from,
            to,
            moved_piece: applied.moved_piece,
            captured_piece: applied.captured,
            was_castling: applied.was_castling,
            was_en_passant: applied.was_en_passant,
            promotion: None,
            prior_en_passant_target: applied.prior_en_passant_target,
            gives_check: is_in_check(&self.board, defender),
            gives_checkmate: is_checkmate(&self.board, defender),
            algebraic_notation: notation,
        };
        self.log
            .log_move(self.history.len() + 1, record.mover(), &record.algebraic_notation);
        self.history.push(record);

        if needs_promotion(&self.board, to) {
            self.pending_promotion = Some(to);
        } else {
            self.update_result_from_position();
        }
        true
    }

    /// Complete a pending promotion on `square` and finalize the notation of
    /// the move that produced it.
    pub fn promote_pawn(&mut self, square: Square, kind: PieceKind) -> bool {
        if self.replay.is_replay() || self.pending_promotion != Some(square) {
            return false;
        }
        if !apply_promotion(&mut self.board, square, kind) {
            return false;
        }
        self.pending_promotion = None;

        let defender = self.board.side_to_move;
        let suffix = check_suffix(&self.board);
        let gives_check = is_in_check(&self.board, defender);
        let gives_checkmate = is_checkmate(&self.board, defender);
        if let Some(record) = self.history.last_mut() {
            record.promotion = Some(kind);
            record.gives_check = gives_check;
            record.gives_checkmate = gives_checkmate;
            record.algebraic_notation = pawn_san_body(record.from, record.to, Some(kind)) + suffix;
        }

        self.log.log_promotion(square, kind);
        self.update_result_from_position();
        true
    }

    /// `move_piece` followed by `promote_pawn` when needed. A promotion
    /// without a choice becomes a queen.
    pub fn play_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        if promotion.is_some_and(|kind| !kind.is_promotion_choice()) {
            return false;
        }
        if !self.move_piece(from, to) {
            return false;
        }
        if self.pending_promotion == Some(to) {
            self.promote_pawn(to, promotion.unwrap_or(PieceKind::Queen));
        }
        true
    }

    /// Play a long algebraic move such as `e2e4` or `e7e8n`.
    pub fn play_uci_move(&mut self, text: &str) -> Result<(), ChessErrors> {
        let decoded = uci_to_move(text)?;
        if self.play_move(decoded.from, decoded.to, decoded.promotion) {
            Ok(())
        } else {
            Err(ChessErrors::IllegalMove(text.trim().to_owned()))
        }
    }

    /// Replay a move received from a peer through the same calls a local
    /// player would make.
    pub fn play_remote_move(&mut self, remote: &RemoteMove) -> Result<(), ChessErrors> {
        remote.validate()?;
        let promotion = remote.promotion_kind()?;
        if promotion.is_some_and(|kind| !kind.is_promotion_choice()) {
            return Err(ChessErrors::InvalidPromotionCode(remote.promotion));
        }
        if self.play_move(remote.from_square(), remote.to_square(), promotion) {
            Ok(())
        } else {
            Err(ChessErrors::IllegalMove(format!("{remote:?}")))
        }
    }

    fn move_block_reason(&self) -> Option<&'static str> {
        if self.replay.is_replay() {
            Some("replay mode is active")
        } else if self.result.is_decided() {
            Some("game is over")
        } else if self.pending_promotion.is_some() {
            Some("promotion pending")
        } else {
            None
        }
    }

    // ---- Result ----

    pub fn set_game_result(&mut self, result: GameResult) {
        self.result = result;
        self.log.log_result(result);
    }

    /// Record a resignation by `color`. Only possible while the game runs.
    pub fn resign(&mut self, color: Color) -> bool {
        if self.result.is_decided() {
            return false;
        }
        self.set_game_result(GameResult::resignation_by(color));
        true
    }

    fn update_result_from_position(&mut self) {
        if self.result.is_decided() {
            return;
        }
        let result = match evaluate_status(&self.board) {
            GameStatus::Checkmate(loser) => GameResult::win_for(loser.opposite()),
            GameStatus::Stalemate(_) | GameStatus::InsufficientMaterial => GameResult::Draw,
            GameStatus::InProgress | GameStatus::Check(_) => return,
        };
        self.set_game_result(result);
    }

    // ---- Replay ----

    #[inline]
    pub fn is_replay_mode(&self) -> bool {
        self.replay.is_replay()
    }

    /// Index of the displayed move, `-1` for the initial position.
    pub fn replay_index(&self) -> isize {
        self.history.cursor().map_or(-1, |index| index as isize)
    }

    /// Snapshot the live board and start browsing. Refused while already
    /// replaying or while a promotion is pending.
    pub fn enter_replay(&mut self) -> bool {
        if self.replay.is_replay() || self.pending_promotion.is_some() {
            return false;
        }
        self.replay = ReplayState::Replay {
            snapshot: Box::new(self.board.clone()),
        };
        self.log.log_replay("enter", self.history.cursor());
        true
    }

    /// Restore the live board taken on entry.
    pub fn exit_replay(&mut self) -> bool {
        let ReplayState::Replay { snapshot } = std::mem::take(&mut self.replay) else {
            return false;
        };
        self.board = *snapshot;
        self.history.move_cursor_to_end();
        self.log.log_replay("exit", self.history.cursor());
        true
    }

    /// Display the position after move `index`, clamped to `-1..=len-1`.
    /// Reaching the newest move returns to live play.
    pub fn replay_to_move(&mut self, index: isize) -> bool {
        if self.history.is_empty() {
            return false;
        }
        if !self.replay.is_replay() && !self.enter_replay() {
            return false;
        }

        let target = clamp_index(index, self.history.len());
        self.board = rebuild_to(&self.initial_board, self.history.records(), target);
        self.history.set_cursor(target);
        self.log.log_replay("seek", target);

        if self.history.is_cursor_at_end() {
            self.exit_replay();
        }
        true
    }

    pub fn replay_first(&mut self) -> bool {
        self.replay_to_move(-1)
    }

    /// One move back. From live play this shows the position before the
    /// newest move.
    pub fn replay_prev(&mut self) -> bool {
        if !self.can_go_to_previous_move() {
            return false;
        }
        self.replay_to_move(self.replay_index() - 1)
    }

    pub fn replay_next(&mut self) -> bool {
        if !self.can_go_to_next_move() {
            return false;
        }
        self.replay_to_move(self.replay_index() + 1)
    }

    pub fn replay_last(&mut self) -> bool {
        if !self.can_go_to_next_move() {
            return false;
        }
        self.replay_to_move(self.history.len() as isize - 1)
    }

    pub fn can_go_to_previous_move(&self) -> bool {
        !self.history.is_empty() && self.history.cursor().is_some()
    }

    pub fn can_go_to_next_move(&self) -> bool {
        self.replay.is_replay() && !self.history.is_cursor_at_end()
    }

    /// Continue the game from the displayed replay position. Moves after
    /// it are discarded and the result is re-derived from the position.
    pub fn resume_from_replay(&mut self) -> bool {
        if !self.replay.is_replay() {
            return false;
        }
        self.replay = ReplayState::Live;
        self.history.truncate_after_cursor();
        self.pending_promotion = None;
        self.result = GameResult::InProgress;
        self.log.log_replay("resume", self.history.cursor());
        self.update_result_from_position();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_validation::{all_valid_moves, has_any_valid_move};
    use crate::utils::algebraic::algebraic_to_square;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("square name should parse")
    }

    fn play(game: &mut ChessGame, moves: &[&str]) {
        for mv in moves {
            game.play_uci_move(mv)
                .unwrap_or_else(|err| panic!("{mv} should be legal: {err}"));
        }
    }

    #[test]
    fn double_step_window_lasts_one_ply() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4"]);
        assert_eq!(game.en_passant_target(), Some(sq("e3")));
        play(&mut game, &["a7a6"]);
        assert_eq!(game.en_passant_target(), None);

        // Black pawn on d4 could take e3 right after e2-e4, but not a move later.
        let mut game = ChessGame::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        play(&mut game, &["e2e4"]);
        assert!(game.is_valid_move(sq("d4"), sq("e3")));
        play(&mut game, &["e8d8", "e1d1"]);
        assert!(!game.is_valid_move(sq("d4"), sq("e3")));
    }

    #[test]
    fn en_passant_only_on_the_immediate_reply() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert!(game.is_valid_move(sq("e5"), sq("d6")));

        play(&mut game, &["g1f3", "h7h6"]);
        assert!(!game.is_valid_move(sq("e5"), sq("d6")));
    }

    #[test]
    fn en_passant_capture_is_recorded() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "e5d6"]);

        let record = game.history().last().expect("history should hold the capture");
        assert!(record.was_en_passant);
        assert_eq!(record.algebraic_notation, "exd6");
        assert!(game.get_piece(sq("d5")).is_none());
        assert_eq!(game.captured_material(Color::Black), 1);
    }

    #[test]
    fn kingside_castle_moves_both_pieces() {
        let mut game = ChessGame::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(game.can_castle(sq("e1"), sq("g1")));
        assert!(game.move_piece(sq("e1"), sq("g1")));

        let king = game.get_piece(sq("g1")).expect("king should be on g1");
        let rook = game.get_piece(sq("f1")).expect("rook should be on f1");
        assert!(king.is(PieceKind::King, Color::White) && king.has_moved);
        assert!(rook.is(PieceKind::Rook, Color::White) && rook.has_moved);
        assert_eq!(game.move_notation(0), Some("O-O"));
        assert!(game.history().last().is_some_and(|record| record.was_castling));
    }

    #[test]
    fn castling_refused_through_check_even_when_unmoved() {
        let game = ChessGame::from_fen("5r1k/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(!game.can_castle(sq("e1"), sq("g1")));
        assert!(!game.is_valid_move(sq("e1"), sq("g1")));
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = ChessGame::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        assert_eq!(game.move_notation(3), Some("Qh4#"));
        assert!(game.is_checkmate(Color::White));
        assert_eq!(game.game_result(), GameResult::BlackWins);
        assert_eq!(game.game_result_string(), "0-1");
        assert!(!game.move_piece(sq("a2"), sq("a3")));
    }

    #[test]
    fn stalemate_and_bare_minor_piece_are_draws() {
        let mut game = ChessGame::from_fen("7k/8/6K1/5Q2/8/8/8/8 w - - 0 1").expect("FEN should parse");
        assert!(game.move_piece(sq("f5"), sq("f7")));
        assert_eq!(game.status(), GameStatus::Stalemate(Color::Black));
        assert_eq!(game.game_result(), GameResult::Draw);

        let mut game =
            ChessGame::from_fen("4k3/8/8/8/8/7r/8/4KB2 w - - 0 1").expect("FEN should parse");
        assert!(game.move_piece(sq("f1"), sq("h3")));
        assert!(game.is_insufficient_material());
        assert_eq!(game.game_result_string(), "1/2-1/2");
        assert_eq!(game.captured_material(Color::Black), 5);
    }

    #[test]
    fn promotion_blocks_moves_until_chosen() {
        let mut game = ChessGame::from_fen("7k/4P3/8/8/8/8/p7/4K3 w - - 0 1").expect("FEN should parse");
        assert!(game.move_piece(sq("e7"), sq("e8")));
        assert!(game.needs_promotion(sq("e8")));
        assert_eq!(game.pending_promotion(), Some(sq("e8")));

        assert!(!game.move_piece(sq("a2"), sq("a1")));
        assert!(!game.promote_pawn(sq("e8"), PieceKind::King));
        assert!(!game.promote_pawn(sq("e8"), PieceKind::Pawn));
        assert!(game.promote_pawn(sq("e8"), PieceKind::Queen));

        let record = game.history().last().expect("promotion move should be recorded");
        assert_eq!(record.promotion, Some(PieceKind::Queen));
        assert_eq!(record.algebraic_notation, "e8=Q+");
        assert!(record.gives_check);
        assert_eq!(game.pending_promotion(), None);
        assert!(game.move_piece(sq("h8"), sq("h7")));
    }

    #[test]
    fn uci_promotion_defaults_to_queen() {
        let mut game = ChessGame::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        game.play_uci_move("e7e8").expect("promotion should play");
        assert_eq!(
            game.get_piece(sq("e8")).map(|piece| piece.kind),
            Some(PieceKind::Queen)
        );

        let mut game = ChessGame::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        game.play_uci_move("e7e8n").expect("underpromotion should play");
        assert_eq!(game.move_notation(0), Some("e8=N"));
    }

    #[test]
    fn illegal_and_malformed_uci_moves_are_errors() {
        let mut game = ChessGame::new();
        assert!(matches!(
            game.play_uci_move("e2e5"),
            Err(ChessErrors::IllegalMove(_))
        ));
        assert!(game.play_uci_move("e2").is_err());
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &Board::new_game());
    }

    #[test]
    fn replay_to_index_then_last_returns_live() {
        let mut game = ChessGame::new();
        let mut snapshots = Vec::new();
        for mv in ["e2e4", "e7e5", "g1f3", "b8c6"] {
            play(&mut game, &[mv]);
            snapshots.push(game.board().clone());
        }
        let live = game.board().clone();

        assert!(game.replay_to_move(1));
        assert!(game.is_replay_mode());
        assert_eq!(game.replay_index(), 1);
        assert_eq!(game.board(), &snapshots[1]);
        assert!(!game.move_piece(sq("f1"), sq("c4")));

        assert!(game.replay_to_move(3));
        assert!(!game.is_replay_mode());
        assert_eq!(game.board(), &live);
        assert_eq!(game.replay_index(), 3);
    }

    #[test]
    fn replay_navigation_clamps_and_steps() {
        let mut game = ChessGame::new();
        assert!(!game.replay_first());
        assert!(!game.can_go_to_previous_move());

        play(&mut game, &["d2d4", "d7d5", "c2c4"]);
        assert!(game.can_go_to_previous_move());
        assert!(!game.can_go_to_next_move());
        assert!(!game.replay_next());
        assert!(!game.replay_last());

        assert!(game.replay_prev());
        assert_eq!(game.replay_index(), 1);
        assert_eq!(game.current_player(), Color::White);

        assert!(game.replay_to_move(-7));
        assert_eq!(game.replay_index(), -1);
        assert_eq!(game.board(), &Board::new_game());
        assert!(!game.can_go_to_previous_move());
        assert!(!game.replay_prev());

        assert!(game.replay_next());
        assert_eq!(game.replay_index(), 0);
        assert_eq!(game.current_player(), Color::Black);

        assert!(game.replay_last());
        assert!(!game.is_replay_mode());
        assert_eq!(game.all_move_notations(), vec!["d4", "d5", "c4"]);
    }

    #[test]
    fn exit_replay_restores_the_snapshot() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "c7c5"]);
        let live = game.board().clone();

        assert!(game.replay_first());
        assert_ne!(game.board(), &live);
        assert!(game.exit_replay());
        assert_eq!(game.board(), &live);
        assert!(!game.exit_replay());
    }

    #[test]
    fn resume_from_replay_truncates_the_future() {
        let mut game = ChessGame::new();
        play(&mut game, &["e2e4", "e7e5", "g1f3"]);

        assert!(game.replay_to_move(0));
        assert!(game.resume_from_replay());
        assert!(!game.is_replay_mode());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_player(), Color::Black);

        play(&mut game, &["d7d5"]);
        assert_eq!(game.all_move_notations(), vec!["e4", "d5"]);
    }

    #[test]
    fn replay_rebuilds_from_a_fen_start() {
        let fen = "r3k2r/pppq1ppp/8/8/8/8/PPPQ1PPP/R3K2R w KQkq - 0 1";
        let mut game = ChessGame::from_fen(fen).expect("FEN should parse");
        play(&mut game, &["e1c1", "e8g8"]);
        assert_eq!(game.all_move_notations(), vec!["O-O-O", "O-O"]);

        assert!(game.replay_first());
        assert_eq!(game.to_fen(), fen);
        assert!(game.replay_next());
        assert_eq!(game.get_piece(sq("d1")).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(game.get_piece(sq("h8")).map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn resignation_is_final() {
        let mut game = ChessGame::new();
        assert!(game.resign(Color::White));
        assert_eq!(game.game_result_string(), "0-1");
        assert!(!game.resign(Color::Black));
        assert!(!game.move_piece(sq("e2"), sq("e4")));

        game.initialize_board();
        assert_eq!(game.game_result(), GameResult::InProgress);
        assert!(game.move_piece(sq("e2"), sq("e4")));
    }

    #[test]
    fn remote_moves_mirror_the_local_game() {
        let mut local = ChessGame::new();
        let mut remote = ChessGame::new();

        for mv in ["e2e4", "d7d5", "e4d5", "g8f6"] {
            play(&mut local, &[mv]);
            let record = local.history().last().expect("move should be recorded");
            remote
                .play_remote_move(&RemoteMove::from_record(record))
                .expect("peer should accept the move");
        }

        assert_eq!(remote.board(), local.board());
        assert_eq!(remote.all_move_notations(), local.all_move_notations());

        let bad = RemoteMove::new(sq("a2"), sq("a5"), None);
        assert!(matches!(
            remote.play_remote_move(&bad),
            Err(ChessErrors::IllegalMove(_))
        ));
    }

    #[test]
    fn mutations_are_logged_and_queries_are_not() {
        let mut game = ChessGame::new();
        let opened = game.log().entries().len();

        let _ = game.legal_destinations(sq("g1"));
        let _ = game.status();
        assert_eq!(game.log().entries().len(), opened);

        play(&mut game, &["g1f3"]);
        assert!(!game.move_piece(sq("e2"), sq("e5")));
        assert_eq!(game.log().entries().len(), opened + 2);
    }

    #[test]
    fn fen_start_honours_the_logging_setting() {
        let quiet = GameConfig {
            logging: false,
            ..GameConfig::default()
        };
        let mut game = ChessGame::from_fen_with_config("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", &quiet)
            .expect("FEN should parse");
        play(&mut game, &["e2e4"]);
        assert!(!game.log().is_enabled());
        assert!(game.log().entries().is_empty());

        let game = ChessGame::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(game.log().is_enabled());
        assert!(!game.log().entries().is_empty());
    }

    #[test]
    fn en_passant_square_without_a_double_step_is_refused() {
        assert!(ChessGame::from_fen("4k3/8/8/8/8/8/3NP3/4K3 w - d3 0 1").is_err());

        // A genuine window only ever removes the enemy pawn.
        let mut game = ChessGame::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        assert!(game.move_piece(sq("e5"), sq("d6")));
        assert!(game.get_piece(sq("d5")).is_none());
        assert_eq!(
            game.captured_pieces(Color::Black)
                .iter()
                .map(|piece| piece.kind)
                .collect::<Vec<_>>(),
            vec![PieceKind::Pawn]
        );
        assert!(game.captured_pieces(Color::White).is_empty());
    }

    /// Random legal playouts: every position is reproduced by replaying to
    /// the previous index, and terminal predicates stay consistent.
    #[test]
    fn random_playouts_replay_exactly() {
        let promotions = [
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ];

        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = ChessGame::with_config(&GameConfig {
                logging: false,
                ..GameConfig::default()
            });
            let mut before_each_ply = Vec::new();

            for _ in 0..160 {
                if game.game_result().is_decided() {
                    break;
                }
                let side = game.current_player();
                let board = game.board().clone();

                let checkmate = is_checkmate(&board, side);
                let stalemate = is_stalemate(&board, side);
                assert!(!(checkmate && stalemate));
                if checkmate {
                    assert!(is_in_check(&board, side) && !has_any_valid_move(&board, side));
                }

                let moves = all_valid_moves(&board, side);
                let Some(&(from, to)) = moves.choose(&mut rng) else {
                    break;
                };
                let promotion = promotions.choose(&mut rng).copied();

                before_each_ply.push(board);
                assert!(game.play_move(from, to, promotion), "seed {seed}: chosen move should play");
            }

            let live = game.board().clone();
            let plies = game.history().len();
            assert_eq!(plies, before_each_ply.len());

            for (ply, expected) in before_each_ply.iter().enumerate().skip(1) {
                assert!(game.replay_to_move(ply as isize - 1));
                let shown = game.board();
                assert_eq!(shown.grid, expected.grid, "seed {seed} ply {ply}");
                assert_eq!(shown.side_to_move, expected.side_to_move);
                assert_eq!(shown.en_passant_target, expected.en_passant_target);
            }

            if plies > 0 {
                assert!(game.replay_to_move(plies as isize - 1));
                assert!(!game.is_replay_mode());
                assert_eq!(game.board(), &live);
            }
        }
    }
}
