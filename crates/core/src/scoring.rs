//! Scoring module - line-clear points, level and gravity speed
//!
//! Classic fixed table with no level multiplier: the level follows the
//! cumulative score, and gravity follows the level.

use crate::types::{BASE_DROP_MS, LEVEL_SPEED_CAP, LINE_SCORES, SCORE_PER_LEVEL};

/// Points for clearing `lines` rows in a single lock (0 for none or more than 4)
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level for a cumulative score: `score / 500 + 1`
pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds.
///
/// `BASE - BASE * (clamp(level, 1, 9) - 1) / 10`, so every level up to 9
/// shaves a tenth off the base interval and higher levels stay at 9's speed.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let modifier = level.clamp(1, LEVEL_SPEED_CAP);
    BASE_DROP_MS - BASE_DROP_MS * (modifier - 1) / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 40);
        assert_eq!(line_clear_score(2), 100);
        assert_eq!(line_clear_score(3), 300);
        assert_eq!(line_clear_score(4), 1200);
        assert_eq!(line_clear_score(5), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(499), 1);
        assert_eq!(level_for_score(500), 2);
        assert_eq!(level_for_score(1999), 4);
        assert_eq!(level_for_score(4000), 9);
        assert_eq!(level_for_score(10_000), 21);
    }

    #[test]
    fn test_gravity_intervals() {
        assert_eq!(gravity_interval_ms(0), 1000);
        assert_eq!(gravity_interval_ms(1), 1000);
        assert_eq!(gravity_interval_ms(2), 900);
        assert_eq!(gravity_interval_ms(5), 600);
        assert_eq!(gravity_interval_ms(9), 200);
        assert_eq!(gravity_interval_ms(20), 200); // No speed-up past 9
    }
}
