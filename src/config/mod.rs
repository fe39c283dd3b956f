//! Configuration management for voxmetric

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for voxmetric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Short-time analysis parameters
    pub analysis: AnalysisConfig,
    /// Score normalization constants
    pub scoring: ScoringConfig,
    /// ASR collaborator settings
    pub asr: AsrConfig,
}

/// Short-time analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sample rate audio is resampled to before analysis
    pub sample_rate: u32,
    /// FFT size
    pub n_fft: usize,
    /// Hop length between frames
    pub hop_length: usize,
    /// Window length
    pub win_length: usize,
    /// Lowest fundamental frequency considered (Hz)
    pub pitch_fmin: f32,
    /// Highest fundamental frequency considered (Hz)
    pub pitch_fmax: f32,
    /// Pre-emphasis coefficient used for the noise residual
    pub preemphasis: f32,
}

/// Score normalization constants
///
/// These are fixed calibration choices, not learned parameters. They are
/// kept as configuration so the reference points can be adjusted without
/// touching the combination formulas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// SNR assigned when the noise proxy is exactly zero (dB)
    pub snr_ceiling_db: f32,
    /// SNR treated as "excellent"; values at or above saturate to 1 (dB)
    pub snr_reference_db: f32,
    /// Spectral contrast treated as "excellent" (dB)
    pub contrast_reference_db: f32,
    /// Pitch standard deviation treated as fully expressive (Hz)
    pub pitch_reference_hz: f32,
    /// Multiplier applied to the energy coefficient of variation
    pub energy_scale: f32,
}

/// ASR collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsrConfig {
    /// Path to the speech recognition model
    pub model_path: PathBuf,
    /// Sample rate the model expects
    pub sample_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            scoring: ScoringConfig::default(),
            asr: AsrConfig::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: crate::SAMPLE_RATE,
            n_fft: crate::N_FFT,
            hop_length: crate::HOP_LENGTH,
            win_length: crate::WIN_LENGTH,
            // C2 to C7, a plausible range for human speech
            pitch_fmin: 65.41,
            pitch_fmax: 2093.0,
            preemphasis: 0.97,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            snr_ceiling_db: 100.0,
            snr_reference_db: 50.0,
            contrast_reference_db: 50.0,
            pitch_reference_hz: 50.0,
            energy_scale: 2.0,
        }
    }
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/wav2vec2.onnx"),
            sample_rate: crate::ASR_SAMPLE_RATE,
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.analysis.sample_rate == 0 {
            return Err(Error::Config("sample_rate must be > 0".into()));
        }
        if self.analysis.n_fft == 0 {
            return Err(Error::Config("n_fft must be > 0".into()));
        }
        if self.analysis.hop_length == 0 {
            return Err(Error::Config("hop_length must be > 0".into()));
        }
        if self.analysis.win_length > self.analysis.n_fft {
            return Err(Error::Config("win_length must not exceed n_fft".into()));
        }
        if self.analysis.pitch_fmin <= 0.0 || self.analysis.pitch_fmax <= self.analysis.pitch_fmin
        {
            return Err(Error::Config(
                "pitch range must satisfy 0 < fmin < fmax".into(),
            ));
        }
        if self.analysis.pitch_fmax > self.analysis.sample_rate as f32 / 2.0 {
            return Err(Error::Config(
                "pitch_fmax must be below the Nyquist frequency".into(),
            ));
        }

        if self.scoring.snr_reference_db <= 0.0 {
            return Err(Error::Config("snr_reference_db must be > 0".into()));
        }
        if self.scoring.contrast_reference_db <= 0.0 {
            return Err(Error::Config("contrast_reference_db must be > 0".into()));
        }
        if self.scoring.pitch_reference_hz <= 0.0 {
            return Err(Error::Config("pitch_reference_hz must be > 0".into()));
        }
        if !(0.0..1.0).contains(&self.analysis.preemphasis) {
            return Err(Error::Config("preemphasis must be in [0, 1)".into()));
        }

        if self.asr.sample_rate == 0 {
            return Err(Error::Config("asr.sample_rate must be > 0".into()));
        }

        Ok(())
    }
}
