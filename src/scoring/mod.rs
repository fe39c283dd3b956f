//! Score types and the three metric scorers

mod accuracy;
mod clarity;
mod emotion;

pub use accuracy::AccuracyScorer;
pub use clarity::ClarityScorer;
pub use emotion::EmotionScorer;

use serde::Serialize;

/// A quality score constrained to [0, 1] by construction
///
/// Every scorer clamps before returning; no entity can emit a score
/// outside this range. Non-finite inputs collapse to 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f32);

impl Score {
    /// The degraded-metric default
    pub const ZERO: Score = Score(0.0);

    /// Create a score, clamping to [0, 1]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Score(value.clamp(0.0, 1.0))
        } else {
            Score(0.0)
        }
    }

    /// Get the inner value
    pub fn value(self) -> f32 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_range() {
        assert_eq!(Score::new(1.5).value(), 1.0);
        assert_eq!(Score::new(-0.5).value(), 0.0);
        assert_eq!(Score::new(0.42).value(), 0.42);
    }

    #[test]
    fn test_score_rejects_non_finite() {
        assert_eq!(Score::new(f32::NAN).value(), 0.0);
        assert_eq!(Score::new(f32::INFINITY).value(), 0.0);
    }

    #[test]
    fn test_score_serializes_as_float() {
        let json = serde_json::to_string(&Score::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }
}
