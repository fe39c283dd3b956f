//! Quality analysis pipeline
//!
//! Coordinates decoding, feature extraction, and the three scorers.

mod analyzer;

pub use analyzer::QualityAnalyzer;

use crate::scoring::Score;
use serde::Serialize;

/// Result of one quality analysis call
///
/// `wer` is present only when a reference text was supplied; its absence
/// is a normal, non-error case and the key is omitted from the JSON
/// output entirely.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    /// Perceptual clarity in [0, 1]
    pub clarity: Score,
    /// Emotional expressiveness in [0, 1]
    pub emotion: Score,
    /// Transcription accuracy in [0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wer: Option<Score>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_omits_absent_wer() {
        let report = QualityReport {
            clarity: Score::new(0.5),
            emotion: Score::new(0.25),
            wer: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("clarity"));
        assert!(json.contains("emotion"));
        assert!(!json.contains("wer"));
    }

    #[test]
    fn test_report_includes_present_wer() {
        let report = QualityReport {
            clarity: Score::new(0.5),
            emotion: Score::new(0.25),
            wer: Some(Score::new(1.0)),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"wer\":1.0"));
    }
}
