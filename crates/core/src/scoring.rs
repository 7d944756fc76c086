//! Scoring module - line clear points, level curve and gravity speed
//!
//! Line clears score `LINE_SCORES[lines] * (level + 1)`. Every ten lines is a
//! level, and each level shortens the gravity interval by 20% down to a floor.

use crate::types::{
    BASE_GRAVITY_MS, GRAVITY_DECAY, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL, LINE_SCORES,
    MIN_GRAVITY_MS,
};

/// Calculate line clear score
/// lines: number of lines cleared at once (1-4)
/// level: current level (0-based), before the clear is counted
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize].saturating_mul(level + 1)
}

/// Points for a hard drop of `rows` rows.
pub fn calculate_hard_drop_score(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Level reached after clearing `lines` lines in total.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Gravity interval in milliseconds for a level.
///
/// `500 * 0.8^level`, never below 50ms.
pub fn gravity_interval_ms(level: u32) -> f64 {
    let exponent = level.min(i32::MAX as u32) as i32;
    (BASE_GRAVITY_MS * GRAVITY_DECAY.powi(exponent)).max(MIN_GRAVITY_MS)
}
