//! Scoring module - points for cleared rows
//!
//! Every cleared row is worth a flat [`SCORE_PER_LINE`] points; there are no
//! level multipliers or combo bonuses.

use crate::types::SCORE_PER_LINE;

/// Points for clearing `lines` rows in a single sweep.
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(SCORE_PER_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(4), 40);
    }

    #[test]
    fn test_line_clear_score_saturates() {
        assert_eq!(line_clear_score(u32::MAX), u32::MAX);
    }
}
