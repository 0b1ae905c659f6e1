//! Session settings that sit beside the engine rather than inside it.
//!
//! Nothing here influences rules. The renderer takes `piece_style`, the PGN
//! writer takes the header values and line width, and `ChessGame` only reads
//! `logging` when it creates its log.

use crate::utils::render_game_state::PieceStyle;

pub const PIECE_STYLE_ENV: &str = "DUEL_CHESS_PIECE_STYLE";
pub const LOGGING_ENV: &str = "DUEL_CHESS_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub piece_style: PieceStyle,
    pub event: String,
    pub site: String,
    pub white_player: String,
    pub black_player: String,
    /// Full moves per movetext line in PGN output.
    pub pgn_moves_per_line: usize,
    pub logging: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            piece_style: PieceStyle::default(),
            event: "Casual Game".to_owned(),
            site: "Local".to_owned(),
            white_player: "White".to_owned(),
            black_player: "Black".to_owned(),
            pgn_moves_per_line: 6,
            logging: true,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `DUEL_CHESS_PIECE_STYLE` and `DUEL_CHESS_LOG`.
    /// Unrecognised values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(PIECE_STYLE_ENV).ok().as_deref(),
            std::env::var(LOGGING_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, piece_style: Option<&str>, logging: Option<&str>) -> Self {
        if let Some(style) = piece_style.and_then(|value| value.parse().ok()) {
            self.piece_style = style;
        }
        match logging.map(str::trim) {
            Some("0") | Some("false") | Some("off") => self.logging = false,
            Some("1") | Some("true") | Some("on") => self.logging = true,
            _ => {}
        }
        self
    }
}
