//! PGN export of a finished or running game.
//!
//! Movetext is taken from the finalized notation stored on each move record;
//! nothing is re-derived here except the result token for a game whose
//! stored result is still `*`.

use chrono::Local;

use crate::game_config::GameConfig;
use crate::game_state::chess_game::ChessGame;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_result::GameResult;
use crate::move_generation::game_status::{evaluate_status, GameStatus};
use crate::utils::fen_generator::generate_fen;

/// Export `game` dated today.
pub fn write_pgn(game: &ChessGame, config: &GameConfig) -> String {
    let date = Local::now().format("%Y.%m.%d").to_string();
    write_pgn_dated(game, config, &date)
}

/// Export `game` with an explicit `Date` header value.
pub fn write_pgn_dated(game: &ChessGame, config: &GameConfig, date: &str) -> String {
    let result = pgn_result(game);

    let mut headers: Vec<(&str, String)> = vec![
        ("Event", config.event.clone()),
        ("Site", config.site.clone()),
        ("Date", date.to_owned()),
        ("Round", "-".to_owned()),
        ("White", config.white_player.clone()),
        ("Black", config.black_player.clone()),
        ("Result", result.to_owned()),
    ];

    let initial_fen = generate_fen(game.initial_board());
    if initial_fen != STARTING_POSITION_FEN {
        headers.push(("SetUp", "1".to_owned()));
        headers.push(("FEN", initial_fen));
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let starts_with_black = game.initial_board().side_to_move == Color::Black;
    let full_moves = group_full_moves(&game.all_move_notations(), starts_with_black);
    let per_line = config.pgn_moves_per_line.max(1);

    let mut lines: Vec<String> = full_moves
        .chunks(per_line)
        .map(|chunk| chunk.join(" "))
        .collect();
    match lines.last_mut() {
        Some(last) => {
            last.push(' ');
            last.push_str(result);
        }
        None => lines.push(result.to_owned()),
    }

    out.push_str(&lines.join("\n"));
    out.push('\n');
    out
}

/// Stored result, or the one implied by the live position when the stored
/// result is still undecided.
pub fn pgn_result(game: &ChessGame) -> &'static str {
    let stored = game.game_result();
    if stored.is_decided() {
        return stored.as_str();
    }
    match evaluate_status(game.live_board()) {
        GameStatus::Checkmate(loser) => GameResult::win_for(loser.opposite()).as_str(),
        GameStatus::Stalemate(_) | GameStatus::InsufficientMaterial => GameResult::Draw.as_str(),
        GameStatus::InProgress | GameStatus::Check(_) => GameResult::InProgress.as_str(),
    }
}

/// `["1. e4 e5", "2. Nf3"]`. A game starting with Black opens with `1... x`.
fn group_full_moves(notations: &[String], starts_with_black: bool) -> Vec<String> {
    let mut full_moves = Vec::new();
    let mut rest = notations;
    let mut number = 1usize;

    if starts_with_black {
        if let Some((first, tail)) = rest.split_first() {
            full_moves.push(format!("{number}... {first}"));
            rest = tail;
            number += 1;
        }
    }

    for pair in rest.chunks(2) {
        full_moves.push(format!("{number}. {}", pair.join(" ")));
        number += 1;
    }

    full_moves
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
