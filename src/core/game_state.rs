//! Game state module - the resolution engine over a game session
//!
//! This module ties together the board, piece, RNG, and scoring components.
//! It is the sole mutator of session state: external input layers call its
//! operations and rendering layers read the resulting state. Every operation
//! is total - rejected moves and rotations leave the state unchanged and the
//! only terminal condition is the game-over flag.

use crate::core::pieces::{self, Tetromino, SPAWN_POSITION};
use crate::core::rng::PieceRng;
use crate::core::scoring::{calculate_drop_time, calculate_level, calculate_line_score};
use crate::core::snapshot::GameSnapshot;
use crate::core::Board;
use crate::types::{GameAction, BASE_DROP_MS};

/// Complete game session state
///
/// The engine assumes a single logical thread of control: every operation
/// reads then writes the whole session, so concurrent embeddings must
/// serialize access externally.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Tetromino>,
    next: Option<Tetromino>,
    rng: PieceRng,
    score: u32,
    lines: u32,
    level: u32,
    game_over: bool,
    paused: bool,
}

impl GameState {
    /// Create a fresh session with the given RNG seed
    ///
    /// Both the current and the next piece are drawn up front, so the session
    /// is immediately playable.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            current: None,
            next: None,
            rng: PieceRng::new(seed),
            score: 0,
            lines: 0,
            level: 0,
            game_over: false,
            paused: false,
        };
        state.reset();
        state
    }

    /// Reset to a fresh session
    ///
    /// The RNG stream continues rather than restarting, so a reset after game
    /// over does not replay the previous game's piece sequence.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = Some(Tetromino::spawn(self.rng.draw()));
        self.next = Some(Tetromino::spawn(self.rng.draw()));
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.game_over = false;
        self.paused = false;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Tetromino> {
        self.current
    }

    pub fn next(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Gravity interval for the current level, for the external scheduler
    pub fn drop_interval_ms(&self) -> u32 {
        calculate_drop_time(self.level, BASE_DROP_MS)
    }

    /// Promote the next piece to current and draw a fresh next piece
    ///
    /// The promoted piece is re-anchored at the spawn position. If it
    /// collides with settled cells there, the game-over flag is set and
    /// nothing is installed - this is the loss condition. Returns whether a
    /// piece was installed.
    pub fn spawn_next(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(next) = self.next else {
            return false;
        };

        let promoted = Tetromino {
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
            ..next
        };

        if !self.board.is_valid_placement(&promoted) {
            self.game_over = true;
            return false;
        }

        self.current = Some(promoted);
        self.next = Some(Tetromino::spawn(self.rng.draw()));
        true
    }

    /// Try to translate the current piece by (dx, dy)
    ///
    /// Rejected silently when the candidate is blocked by a wall or the
    /// stack; that is the normal case, not an error.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let moved = Tetromino {
            x: current.x + dx,
            y: current.y + dy,
            ..current
        };

        if self.board.is_valid_placement(&moved) {
            self.current = Some(moved);
            return true;
        }

        false
    }

    /// Try to rotate the current piece clockwise, with wall-kick fallback
    ///
    /// When the rotation fails at the anchor and at every kick offset, both
    /// the anchor and the geometry stay at their pre-rotation state.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let board = &self.board;
        match pieces::try_rotate(&current, |candidate| board.is_valid_placement(candidate)) {
            Some(rotated) => {
                self.current = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Maximum downward translation still valid for the piece
    fn drop_distance(&self, piece: &Tetromino) -> i8 {
        let mut distance: i8 = 0;
        loop {
            let candidate = Tetromino {
                y: piece.y + distance + 1,
                ..*piece
            };
            if !self.board.is_valid_placement(&candidate) {
                break;
            }
            distance += 1;
        }
        distance
    }

    /// Drop the current piece to its lowest legal position
    ///
    /// The piece is NOT locked here: the next gravity tick finds no further
    /// downward move and performs the lock-in. Returns the distance dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over || self.paused {
            return 0;
        }
        let Some(current) = self.current else {
            return 0;
        };

        let distance = self.drop_distance(&current);
        if distance > 0 {
            self.current = Some(Tetromino {
                y: current.y + distance,
                ..current
            });
        }
        distance as u32
    }

    /// The gravity step, driven by the external scheduler
    ///
    /// Moves the current piece down one row when possible. Otherwise the
    /// piece has landed: it is settled into the board, full lines are
    /// cleared, lines/level/score are updated, and the current slot is
    /// emptied (the driver then calls [`spawn_next`](Self::spawn_next)).
    /// Returns whether the session advanced.
    pub fn soft_drop_tick(&mut self) -> bool {
        if self.game_over || self.paused {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };

        let dropped = Tetromino {
            y: current.y + 1,
            ..current
        };
        if self.board.is_valid_placement(&dropped) {
            self.current = Some(dropped);
            return true;
        }

        self.lock_current();
        true
    }

    /// Settle the current piece into the board and resolve the landing
    fn lock_current(&mut self) {
        let Some(current) = self.current.take() else {
            return;
        };

        let placed = self.board.place(&current);
        let (board, cleared) = placed.clear_full_lines();
        self.board = board;

        // The new level applies to the score for this very clear.
        self.lines += cleared;
        self.level = calculate_level(self.lines);
        self.score += calculate_line_score(cleared as usize, self.level);
    }

    /// Projected landing anchor of the current piece (pure query)
    pub fn ghost_position(&self) -> Option<(i8, i8)> {
        let current = self.current?;
        let distance = self.drop_distance(&current);
        Some((current.x, current.y + distance))
    }

    /// Flip the paused flag unconditionally
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Apply a discrete input command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::HardDrop => self.hard_drop() > 0,
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Fill a snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.current = self.current;
        out.ghost = self.ghost_position();
        out.next = self.next.map(|piece| piece.kind);
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.game_over = self.game_over;
        out.paused = self.paused;
    }

    /// Plain-data view of the session for rendering layers
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, piece: Option<Tetromino>) {
        self.current = piece;
    }

    #[cfg(test)]
    pub(crate) fn set_lines(&mut self, lines: u32) {
        self.lines = lines;
        self.level = calculate_level(lines);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
