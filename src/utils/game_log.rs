//! In-memory game log.
//!
//! Each mutating game operation appends one timestamped line. The buffer can
//! be dumped to a dated file under a logs directory when a session ends.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_result::GameResult;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone)]
pub struct GameLog {
    entries: Vec<String>,
    enabled: bool,
    started_at: DateTime<Local>,
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GameLog {
    pub fn new(enabled: bool) -> Self {
        let mut log = Self {
            entries: Vec::new(),
            enabled,
            started_at: Local::now(),
        };
        let opened = log.started_at.format("%Y-%m-%d %H:%M:%S").to_string();
        log.log(&format!("game log opened {opened}"));
        log
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Append `message` with a wall-clock timestamp. No-op when disabled.
    pub fn log(&mut self, message: &str) {
        if !self.enabled {
            return;
        }
        let stamp = Local::now().format("%H:%M:%S%.3f");
        self.entries.push(format!("[{stamp}] {message}"));
    }

    pub fn log_new_game(&mut self, start_fen: &str) {
        self.log(&format!("new game from {start_fen}"));
    }

    pub fn log_move(&mut self, ply: usize, mover: Color, notation: &str) {
        self.log(&format!("{ply}. {mover:?} plays {notation}"));
    }

    pub fn log_rejected_move(&mut self, from: Square, to: Square, reason: &str) {
        self.log(&format!(
            "rejected {}-{}: {reason}",
            square_name(from),
            square_name(to)
        ));
    }

    pub fn log_promotion(&mut self, square: Square, kind: PieceKind) {
        self.log(&format!("promotion on {} to {kind:?}", square_name(square)));
    }

    pub fn log_replay(&mut self, action: &str, index: Option<usize>) {
        match index {
            Some(index) => self.log(&format!("replay {action} -> move {index}")),
            None => self.log(&format!("replay {action} -> initial position")),
        }
    }

    pub fn log_result(&mut self, result: GameResult) {
        self.log(&format!("result {result:?} ({})", result.as_str()));
    }

    #[inline]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write every entry to `<dir>/<started-at>.txt`, creating `dir` first.
    /// Returns the written path.
    pub fn save_to_file(&self, dir: &Path) -> Result<PathBuf, ChessErrors> {
        fs::create_dir_all(dir)?;

        let file_name = format!("{}.txt", self.started_at.format("%Y_%m_%d_%H_%M_%S"));
        let path = dir.join(file_name);

        let mut contents = self.entries.join("\n");
        contents.push('\n');
        fs::write(&path, contents)?;

        Ok(path)
    }
}

fn square_name(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|| format!("({},{})", square.row, square.col))
}
