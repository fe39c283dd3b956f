//! Signal feature extraction
//!
//! Pure numeric routines that turn a waveform into the scalar descriptors
//! consumed by the scorers. Every function here is total for non-empty
//! input: divisions are guarded and degenerate signals (all-zero audio,
//! empty pitch tracks) produce the neutral value 0 instead of an error.

pub mod pitch;
pub mod spectral;

pub use pitch::pitch_track;
pub use spectral::spectral_contrast;

use crate::audio::{apply_preemphasis, energy_track, AudioData};
use crate::config::AnalysisConfig;
use crate::{Error, Result};

/// Scalar descriptors derived from one waveform
///
/// Immutable once computed. `signal_power`, `noise_power` and
/// `spectral_contrast` feed the clarity score; `pitch_variation` and
/// `energy_variation` feed the emotion score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSet {
    /// Mean of squared samples
    pub signal_power: f32,
    /// Mean of squared noise-residual samples
    pub noise_power: f32,
    /// Mean spectral contrast across frames and sub-bands (dB)
    pub spectral_contrast: f32,
    /// Standard deviation of voiced pitch estimates (Hz)
    pub pitch_variation: f32,
    /// Coefficient of variation of the frame-wise RMS energy
    pub energy_variation: f32,
}

impl FeatureSet {
    /// Extract all descriptors from a waveform
    ///
    /// The spectral branch (power, noise residual, contrast) and the
    /// prosodic branch (pitch and energy tracks) are independent and run
    /// in parallel.
    pub fn extract(audio: &AudioData, config: &AnalysisConfig) -> Result<Self> {
        if audio.is_empty() {
            return Err(Error::Audio("Empty audio buffer".into()));
        }

        let (spectral_branch, prosodic_branch) = rayon::join(
            || {
                let signal_power = signal_power(&audio.samples);
                let noise_power = noise_power(&audio.samples, config.preemphasis);
                let contrast =
                    spectral_contrast(&audio.samples, audio.sample_rate, config);
                (signal_power, noise_power, contrast)
            },
            || {
                let f0 = pitch_track(&audio.samples, audio.sample_rate, config);
                let voiced: Vec<f32> = f0.into_iter().filter(|&f| f > 0.0).collect();
                let pitch_variation = std_dev(&voiced);

                let energy = energy_track(&audio.samples, config.n_fft, config.hop_length);
                let energy_mean = mean(&energy);
                let energy_variation = if energy_mean > 0.0 {
                    std_dev(&energy) / energy_mean
                } else {
                    0.0
                };
                (pitch_variation, energy_variation)
            },
        );

        let (signal_power, noise_power, spectral_contrast) = spectral_branch;
        let (pitch_variation, energy_variation) = prosodic_branch;

        Ok(Self {
            signal_power,
            noise_power,
            spectral_contrast,
            pitch_variation,
            energy_variation,
        })
    }
}

/// Mean of squared samples; 0 for silence
pub fn signal_power(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }
    signal.iter().map(|x| x * x).sum::<f32>() / signal.len() as f32
}

/// Noise residual: the signal minus its pre-emphasized copy
///
/// This is a proxy for noise energy, not a physical noise measurement:
/// pre-emphasis removes most of a smooth periodic signal, so what remains
/// correlates with broadband content.
pub fn noise_residual(signal: &[f32], coef: f32) -> Vec<f32> {
    let emphasized = apply_preemphasis(signal, coef);
    signal
        .iter()
        .zip(emphasized.iter())
        .map(|(x, y)| x - y)
        .collect()
}

/// Mean power of the noise residual
pub fn noise_power(signal: &[f32], coef: f32) -> f32 {
    signal_power(&noise_residual(signal, coef))
}

/// Arithmetic mean; 0 for an empty slice
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population standard deviation; 0 for an empty slice
pub fn std_dev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f32>() / values.len() as f32;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(freq: f32, sample_rate: u32, duration: f32) -> Vec<f32> {
        let n = (sample_rate as f32 * duration) as usize;
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_signal_power_of_silence() {
        assert_eq!(signal_power(&vec![0.0; 1000]), 0.0);
    }

    #[test]
    fn test_signal_power_of_sine() {
        // Mean power of a unit sine is 0.5
        let signal = sine(440.0, 22050, 1.0);
        assert!((signal_power(&signal) - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_noise_residual_is_scaled_history() {
        // residual[n] = coef * x[n-1] for n >= 1, residual[0] = 0
        let signal = vec![1.0, 2.0, 3.0];
        let residual = noise_residual(&signal, 0.97);
        assert!((residual[0]).abs() < 1e-6);
        assert!((residual[1] - 0.97).abs() < 1e-5);
        assert!((residual[2] - 1.94).abs() < 1e-5);
    }

    #[test]
    fn test_noise_power_tracks_coefficient() {
        // The residual is exactly coef * x[n-1] past the first sample, so
        // its power sits at coef^2 times the signal power.
        let signal = sine(440.0, 22050, 1.0);
        let np = noise_power(&signal, 0.97);
        let sp = signal_power(&signal);
        assert!((np - 0.97 * 0.97 * sp).abs() < 0.01);
    }

    #[test]
    fn test_noise_power_zero_for_silence() {
        assert_eq!(noise_power(&vec![0.0; 1000], 0.97), 0.0);
    }

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values) - 5.0).abs() < 1e-6);
        assert!((std_dev(&values) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_std_dev_empty() {
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn test_extract_rejects_empty_audio() {
        let audio = AudioData::new(vec![], 22050);
        assert!(FeatureSet::extract(&audio, &AnalysisConfig::default()).is_err());
    }

    #[test]
    fn test_extract_silence_is_neutral() {
        let audio = AudioData::new(vec![0.0; 22050], 22050);
        let features = FeatureSet::extract(&audio, &AnalysisConfig::default()).unwrap();

        assert_eq!(features.signal_power, 0.0);
        assert_eq!(features.noise_power, 0.0);
        assert_eq!(features.pitch_variation, 0.0);
        assert_eq!(features.energy_variation, 0.0);
        assert!(features.spectral_contrast.is_finite());
    }

    #[test]
    fn test_extract_sine_features_finite() {
        let audio = AudioData::new(sine(220.0, 22050, 1.0), 22050);
        let features = FeatureSet::extract(&audio, &AnalysisConfig::default()).unwrap();

        assert!(features.signal_power > 0.0);
        assert!(features.spectral_contrast.is_finite());
        assert!(features.pitch_variation >= 0.0);
        assert!(features.energy_variation >= 0.0);
    }
}
