use crate::game_state::chess_types::Color;

/// Outcome of the game as recorded by the engine or forced by a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameResult {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
    WhiteResigns,
    BlackResigns,
}

impl GameResult {
    /// Standard result token: `1-0`, `0-1`, `1/2-1/2` or `*`.
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins | GameResult::BlackResigns => "1-0",
            GameResult::BlackWins | GameResult::WhiteResigns => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::InProgress => "*",
        }
    }

    #[inline]
    pub const fn is_decided(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    pub const fn resignation_by(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteResigns,
            Color::Black => GameResult::BlackResigns,
        }
    }
}
