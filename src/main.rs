//! Hot-seat text front end.
//!
//! Reads one command per line from stdin. Anything that is not a command is
//! played as a long algebraic move (`e2e4`, `e7e8q`).

use std::io::{self, BufRead, Write};
use std::path::Path;

use duel_chess::game_config::GameConfig;
use duel_chess::game_state::chess_game::ChessGame;
use duel_chess::move_generation::game_status::GameStatus;
use duel_chess::utils::algebraic::{algebraic_to_square, square_to_algebraic};
use duel_chess::utils::pgn::write_pgn;
use duel_chess::utils::render_game_state::render_board;

const LOG_DIR: &str = "logs";

const HELP: &str = "commands: <uci move> | board | moves | legal <square> | first | prev | next | last \
                    | live | resume | fen | pgn | resign | new [fen] | log | help | quit";

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(GameConfig::from_env());

    session.show_board(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct Session {
    game: ChessGame,
    config: GameConfig,
}

impl Session {
    fn new(config: GameConfig) -> Self {
        Self {
            game: ChessGame::with_config(&config),
            config,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "help" => writeln!(out, "{HELP}")?,
            "board" => self.show_board(out)?,
            "moves" => {
                for (index, pair) in self.game.all_move_notations().chunks(2).enumerate() {
                    writeln!(out, "{}. {}", index + 1, pair.join(" "))?;
                }
            }
            "legal" => match parts.next().map(algebraic_to_square) {
                Some(Ok(from)) => {
                    let names: Vec<String> = self
                        .game
                        .legal_destinations(from)
                        .into_iter()
                        .filter_map(square_to_algebraic)
                        .collect();
                    writeln!(out, "{}", names.join(" "))?;
                }
                Some(Err(err)) => writeln!(out, "error: {err}")?,
                None => writeln!(out, "usage: legal <square>")?,
            },
            "first" | "prev" | "next" | "last" | "live" | "resume" => {
                let moved = match cmd {
                    "first" => self.game.replay_first(),
                    "prev" => self.game.replay_prev(),
                    "next" => self.game.replay_next(),
                    "last" => self.game.replay_last(),
                    "live" => self.game.exit_replay(),
                    _ => self.game.resume_from_replay(),
                };
                if moved {
                    self.show_board(out)?;
                } else {
                    writeln!(out, "nothing to do")?;
                }
            }
            "fen" => writeln!(out, "{}", self.game.to_fen())?,
            "pgn" => write!(out, "{}", write_pgn(&self.game, &self.config))?,
            "resign" => {
                let side = self.game.current_player();
                if self.game.resign(side) {
                    writeln!(out, "{side:?} resigns: {}", self.game.game_result_string())?;
                } else {
                    writeln!(out, "game is already decided")?;
                }
            }
            "new" => {
                let fen = parts.collect::<Vec<_>>().join(" ");
                if fen.is_empty() {
                    self.game = ChessGame::with_config(&self.config);
                } else {
                    match ChessGame::from_fen_with_config(&fen, &self.config) {
                        Ok(game) => self.game = game,
                        Err(err) => {
                            writeln!(out, "error: {err}")?;
                            return Ok(false);
                        }
                    }
                }
                self.show_board(out)?;
            }
            "log" => match self.game.log().save_to_file(Path::new(LOG_DIR)) {
                Ok(path) => writeln!(out, "log written to {}", path.display())?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "quit" | "exit" => return Ok(true),
            _ => match self.game.play_uci_move(trimmed) {
                Ok(()) => self.show_board(out)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
        }

        Ok(false)
    }

    fn show_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_board(self.game.board(), self.config.piece_style))?;

        if self.game.is_replay_mode() {
            writeln!(
                out,
                "replay: move {} of {}",
                self.game.replay_index() + 1,
                self.game.history().len()
            )?;
        }

        let result = self.game.game_result();
        if result.is_decided() {
            return writeln!(out, "result: {}", result.as_str());
        }
        match self.game.status() {
            GameStatus::Check(side) => writeln!(out, "{side:?} to move, in check"),
            GameStatus::Checkmate(side) => writeln!(out, "{side:?} is checkmated"),
            GameStatus::Stalemate(_) => writeln!(out, "stalemate"),
            GameStatus::InsufficientMaterial => writeln!(out, "insufficient material"),
            GameStatus::InProgress => writeln!(out, "{:?} to move", self.game.current_player()),
        }
    }
}
