//! Emotional expressiveness scoring
//!
//! Combines pitch variation with energy dynamics.

use super::Score;
use crate::audio::AudioData;
use crate::config::{AnalysisConfig, ScoringConfig};
use crate::features::FeatureSet;
use crate::Result;

/// Scores emotional expressiveness in [0, 1]
#[derive(Debug, Clone)]
pub struct EmotionScorer {
    config: ScoringConfig,
}

impl EmotionScorer {
    /// Create a scorer with the given normalization constants
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Combine extracted features into an expressiveness score
    ///
    /// Pitch variation is the standard deviation of voiced pitch estimates
    /// (0 when no voiced frames were found); energy variation is the
    /// coefficient of variation of frame-wise RMS (0 when mean energy is 0).
    pub fn score(&self, features: &FeatureSet) -> Score {
        let pitch_norm =
            (features.pitch_variation / self.config.pitch_reference_hz).clamp(0.0, 1.0);
        let energy_norm =
            (features.energy_variation * self.config.energy_scale).clamp(0.0, 1.0);

        Score::new((pitch_norm + energy_norm) / 2.0)
    }

    /// Extract features from a waveform and score it
    pub fn score_audio(&self, audio: &AudioData, analysis: &AnalysisConfig) -> Result<Score> {
        let features = FeatureSet::extract(audio, analysis)?;
        Ok(self.score(&features))
    }
}
