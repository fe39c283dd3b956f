//! Perceptual clarity scoring
//!
//! Combines a signal-to-noise estimate with mean spectral contrast.

use super::Score;
use crate::audio::AudioData;
use crate::config::{AnalysisConfig, ScoringConfig};
use crate::features::FeatureSet;
use crate::Result;

/// Scores perceptual clarity in [0, 1]
#[derive(Debug, Clone)]
pub struct ClarityScorer {
    config: ScoringConfig,
}

impl ClarityScorer {
    /// Create a scorer with the given normalization constants
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Combine extracted features into a clarity score
    ///
    /// SNR in dB against the noise proxy, with a ceiling when the proxy is
    /// exactly zero ("effectively noiseless"), plus spectral contrast.
    /// Both terms saturate linearly at their configured reference points.
    pub fn score(&self, features: &FeatureSet) -> Score {
        let snr_db = if features.noise_power > 0.0 {
            10.0 * (features.signal_power / features.noise_power).log10()
        } else {
            self.config.snr_ceiling_db
        };

        let snr_norm = (snr_db / self.config.snr_reference_db).clamp(0.0, 1.0);
        let contrast_norm =
            (features.spectral_contrast / self.config.contrast_reference_db).clamp(0.0, 1.0);

        Score::new((snr_norm + contrast_norm) / 2.0)
    }

    /// Extract features from a waveform and score it
    pub fn score_audio(&self, audio: &AudioData, analysis: &AnalysisConfig) -> Result<Score> {
        let features = FeatureSet::extract(audio, analysis)?;
        Ok(self.score(&features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(signal_power: f32, noise_power: f32, contrast: f32) -> FeatureSet {
        FeatureSet {
            signal_power,
            noise_power,
            spectral_contrast: contrast,
            pitch_variation: 0.0,
            energy_variation: 0.0,
        }
    }

    #[test]
    fn test_zero_noise_uses_ceiling() {
        let scorer = ClarityScorer::new(&ScoringConfig::default());
        // 100 dB ceiling saturates the SNR term; contrast term is 0
        let score = scorer.score(&features(0.5, 0.0, 0.0));
        assert!((score.value() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_silence_is_finite() {
        let scorer = ClarityScorer::new(&ScoringConfig::default());
        let score = scorer.score(&features(0.0, 0.0, 0.0));
        assert!(score.value().is_finite());
        assert!((0.0..=1.0).contains(&score.value()));
    }

    #[test]
    fn test_zero_signal_with_noise_floors_snr_term() {
        let scorer = ClarityScorer::new(&ScoringConfig::default());
        let score = scorer.score(&features(0.0, 0.1, 0.0));
        assert_eq!(score.value(), 0.0);
    }

    #[test]
    fn test_saturating_snr() {
        let scorer = ClarityScorer::new(&ScoringConfig::default());
        // 60 dB SNR is above the 50 dB reference point
        let score = scorer.score(&features(1.0, 1e-6, 0.0));
        assert!((score.value() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_monotone_in_contrast() {
        let scorer = ClarityScorer::new(&ScoringConfig::default());
        let mut previous = -1.0f32;
        for contrast in [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0] {
            let score = scorer.score(&features(0.5, 0.05, contrast)).value();
            assert!(
                score >= previous,
                "clarity decreased when contrast rose to {}",
                contrast
            );
            previous = score;
        }
    }

    #[test]
    fn test_range_invariant_under_extremes() {
        let scorer = ClarityScorer::new(&ScoringConfig::default());
        for f in [
            features(1e30, 1e-30, 1e6),
            features(1e-30, 1e30, -1e6),
            features(0.0, 0.0, f32::MAX),
        ] {
            let score = scorer.score(&f).value();
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
