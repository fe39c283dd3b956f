//! Audio I/O operations

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Audio data container
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Audio samples (mono, normalized to [-1, 1])
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioData {
    /// Create new audio data
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Get duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Get number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Load audio from WAV file
///
/// # Arguments
/// * `path` - Path to WAV file
/// * `target_sr` - Optional target sample rate (will resample if different)
///
/// # Returns
/// Audio data with samples normalized to [-1, 1]. A decoded waveform is
/// guaranteed to be non-empty with finite samples; anything else is
/// reported as a decode error rather than passed downstream.
pub fn load_audio<P: AsRef<Path>>(path: P, target_sr: Option<u32>) -> Result<AudioData> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let reader =
        WavReader::open(path).map_err(|e| Error::Audio(format!("Failed to open WAV: {}", e)))?;
    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels as usize;

    if sample_rate == 0 || channels == 0 {
        return Err(Error::InvalidFormat(format!(
            "Malformed WAV header in {}",
            path.display()
        )));
    }

    // Read samples based on format
    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Audio(format!("Failed to read samples: {}", e)))?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let samples: Vec<i32> = reader
                .into_samples::<i32>()
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| Error::Audio(format!("Failed to read samples: {}", e)))?;

            // Normalize to [-1, 1]
            let max_val = (1i64 << (bits - 1)) as f32;
            samples.iter().map(|&s| s as f32 / max_val).collect()
        }
    };

    if samples.is_empty() {
        return Err(Error::InvalidFormat(format!(
            "Zero-length waveform in {}",
            path.display()
        )));
    }
    if samples.iter().any(|s| !s.is_finite()) {
        return Err(Error::InvalidFormat(format!(
            "Non-finite samples in {}",
            path.display()
        )));
    }

    // Convert to mono if stereo
    let mono_samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    let mut audio = AudioData::new(mono_samples, sample_rate);

    // Resample if needed
    if let Some(target) = target_sr {
        if target != sample_rate {
            audio = super::resample::resample(&audio, target)?;
        }
    }

    Ok(audio)
}

/// Save audio to WAV file
pub fn save_audio<P: AsRef<Path>>(path: P, audio: &AudioData) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| Error::Audio(format!("Failed to create WAV writer: {}", e)))?;

    for &sample in &audio.samples {
        writer
            .write_sample(sample)
            .map_err(|e| Error::Audio(format!("Failed to write sample: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| Error::Audio(format!("Failed to finalize WAV: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_data_duration() {
        let audio = AudioData::new(vec![0.0; 22050], 22050);
        assert!((audio.duration() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_audio("/nonexistent/file.wav", None);
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join("voxmetric_test_io.wav");
        let samples: Vec<f32> = (0..4410)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 22050.0).sin())
            .collect();
        let audio = AudioData::new(samples.clone(), 22050);

        save_audio(&path, &audio).unwrap();
        let loaded = load_audio(&path, None).unwrap();

        assert_eq!(loaded.sample_rate, 22050);
        assert_eq!(loaded.len(), samples.len());
        assert!((loaded.samples[100] - samples[100]).abs() < 1e-6);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_empty_wav() {
        let path = std::env::temp_dir().join("voxmetric_test_empty.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let writer = WavWriter::create(&path, spec).unwrap();
        writer.finalize().unwrap();

        let result = load_audio(&path, None);
        assert!(matches!(result, Err(Error::InvalidFormat(_))));

        std::fs::remove_file(&path).ok();
    }
}
