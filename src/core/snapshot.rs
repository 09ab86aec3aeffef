//! Plain-data view of a game session for rendering layers

use crate::core::pieces::Tetromino;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything a rendering layer reads, in one plain value
///
/// The board is exported as a `u8` grid (0 = empty, 1-7 = piece kind code);
/// the current piece is included as-is for overlay drawing, together with its
/// projected landing anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<Tetromino>,
    pub ghost: Option<(i8, i8)>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
    pub paused: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            ghost: None,
            next: None,
            score: 0,
            lines: 0,
            level: 0,
            game_over: false,
            paused: false,
        }
    }
}
