//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{base_shape, color_of, try_rotate, Shape, Tetromino};
pub use rng::{PieceRng, SimpleRng};
pub use scoring::{calculate_drop_time, calculate_level, calculate_line_score};
pub use snapshot::GameSnapshot;
