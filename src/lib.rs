//! Deterministic falling-block game logic core.
//!
//! This crate contains the game rules, state management, and simulation logic
//! for a classic falling-block puzzle game. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`core::board`]: 10x20 game board with collision detection and line clearing
//! - [`core::pieces`]: shape catalog, piece geometry, and rotation with wall kicks
//! - [`core::game_state`]: complete game session state and its transitions
//! - [`core::scoring`]: line-clear scoring, level curve, and gravity intervals
//! - [`core::rng`]: seeded uniform piece randomization
//! - [`core::snapshot`]: plain-data view of the session for rendering layers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each spawn is an independent uniform draw over the
//!   7 piece kinds (no bag)
//! - **Matrix rotation**: pieces rotate by a 90° clockwise transform of their
//!   geometry matrix, with a fixed wall-kick fallback sequence
//! - **Deferred lock**: a hard drop only moves the piece to its lowest legal
//!   row; the next gravity tick locks it in
//! - **Scoring**: classic table `[0, 40, 100, 300, 1200]` scaled by `level + 1`,
//!   level up every 10 lines, gravity 20% faster per level with a 50ms floor
//!
//! # Example
//!
//! ```
//! use tetris_engine::core::GameState;
//!
//! // Create a game session; two pieces are drawn up front.
//! let mut game = GameState::new(12345);
//! assert!(game.current().is_some());
//!
//! // The input layer applies discrete commands...
//! game.try_move(-1, 0);
//! game.try_rotate();
//! game.hard_drop();
//!
//! // ...and the external driver advances gravity on its own schedule.
//! game.soft_drop_tick();
//! if game.current().is_none() && !game.game_over() {
//!     game.spawn_next();
//! }
//! ```
//!
//! # Driving the engine
//!
//! The engine owns no timer. The embedding application schedules
//! [`GameState::soft_drop_tick`](core::game_state::GameState::soft_drop_tick)
//! at the cadence reported by
//! [`GameState::drop_interval_ms`](core::game_state::GameState::drop_interval_ms),
//! and calls [`GameState::spawn_next`](core::game_state::GameState::spawn_next)
//! whenever the current piece slot is empty.

pub mod core;
pub mod types;
