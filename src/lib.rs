//! Crate root module declarations for the Duel Chess rules engine.
//!
//! The engine owns board state, legal-move semantics (castling, en passant,
//! promotion), terminal-condition detection, and a replayable move history.
//! Presentation, transport, and external move-suggestion processes are
//! collaborators that call into `game_state::chess_game::ChessGame`.

pub mod chess_errors;
pub mod game_config;

pub mod game_state {
    pub mod board;
    pub mod chess_game;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_result;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_validation;
    pub mod special_moves;
}

pub mod history {
    pub mod move_history;
    pub mod replay;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_log;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod remote_move;
    pub mod render_game_state;
    pub mod san_notation;
}
