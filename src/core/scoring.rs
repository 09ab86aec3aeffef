//! Scoring module - classic line-clear scoring and the level/speed curve

use crate::types::{DROP_INTERVAL_FLOOR_MS, LEVEL_UP_LINES, LINE_SCORES, SPEED_MULTIPLIER};

/// Calculate line clear score (classic rules)
/// lines: number of lines cleared at once (0-4)
/// level: current level (0-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * (level + 1)
}

/// Level management
/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LEVEL_UP_LINES
}

/// Gravity interval for a level (milliseconds)
///
/// Each level shrinks the base interval by the speed multiplier; the result
/// is truncated to whole milliseconds and never drops below the 50ms floor.
pub fn calculate_drop_time(level: u32, base_ms: u32) -> u32 {
    let scaled = f64::from(base_ms) * SPEED_MULTIPLIER.powf(f64::from(level));
    (scaled as u32).max(DROP_INTERVAL_FLOOR_MS)
}
