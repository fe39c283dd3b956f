//! Short-time Fourier analysis and spectral contrast

use crate::config::AnalysisConfig;
use crate::{Error, Result};
use ndarray::Array2;
use num_complex::Complex;
use realfft::RealFftPlanner;
use std::f32::consts::PI;

/// Lower edge of the first octave sub-band (Hz)
const CONTRAST_FMIN: f32 = 200.0;

/// Number of octave sub-bands above the base band
const CONTRAST_BANDS: usize = 6;

/// Fraction of band bins averaged for the peak and valley estimates
const CONTRAST_QUANTILE: f32 = 0.02;

/// Floor applied before taking logarithms
const AMIN: f32 = 1e-10;

/// Compute Hann window
fn hann_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|n| 0.5 * (1.0 - (2.0 * PI * n as f32 / size as f32).cos()))
        .collect()
}

/// Compute Short-Time Fourier Transform (STFT)
///
/// The signal is center-padded by `n_fft / 2` zeros on both sides.
///
/// # Returns
/// Complex STFT matrix (n_fft/2+1, time_frames)
pub fn stft(
    signal: &[f32],
    n_fft: usize,
    hop_length: usize,
    win_length: usize,
) -> Result<Array2<Complex<f32>>> {
    if signal.is_empty() {
        return Err(Error::Audio("Empty signal".into()));
    }

    let window = hann_window(win_length);

    // Pad signal
    let pad_length = n_fft / 2;
    let mut padded = vec![0.0f32; pad_length];
    padded.extend_from_slice(signal);
    padded.extend(vec![0.0f32; pad_length]);

    let num_frames = (padded.len() - n_fft) / hop_length + 1;
    let n_freqs = n_fft / 2 + 1;

    let mut planner = RealFftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n_fft);

    let mut stft_matrix = Array2::zeros((n_freqs, num_frames));

    let mut input_buffer = vec![0.0f32; n_fft];
    let mut output_buffer = vec![Complex::new(0.0f32, 0.0f32); n_freqs];

    for (frame_idx, start) in (0..padded.len() - n_fft + 1)
        .step_by(hop_length)
        .enumerate()
    {
        if frame_idx >= num_frames {
            break;
        }

        // Extract and window the frame
        for i in 0..win_length {
            input_buffer[i] = padded[start + i] * window[i];
        }
        for i in win_length..n_fft {
            input_buffer[i] = 0.0;
        }

        fft.process(&mut input_buffer, &mut output_buffer)
            .map_err(|e| Error::Audio(format!("FFT failed: {}", e)))?;

        for (freq_idx, &val) in output_buffer.iter().enumerate() {
            stft_matrix[[freq_idx, frame_idx]] = val;
        }
    }

    Ok(stft_matrix)
}

/// Compute magnitude spectrogram from STFT
pub fn magnitude_spectrogram(stft_matrix: &Array2<Complex<f32>>) -> Array2<f32> {
    stft_matrix.mapv(|c| c.norm())
}

/// Octave-spaced sub-band boundaries as FFT bin ranges
///
/// Band 0 covers everything below `CONTRAST_FMIN`; the remaining bands
/// double in width up to the Nyquist frequency.
fn band_edges(sample_rate: u32, n_fft: usize) -> Vec<(usize, usize)> {
    let n_freqs = n_fft / 2 + 1;
    let hz_per_bin = sample_rate as f32 / n_fft as f32;
    let bin_for = |hz: f32| ((hz / hz_per_bin).round() as usize).min(n_freqs);

    let mut edges_hz = vec![0.0, CONTRAST_FMIN];
    for k in 1..=CONTRAST_BANDS {
        edges_hz.push(CONTRAST_FMIN * (1u32 << k) as f32);
    }

    let mut bands = Vec::new();
    for pair in edges_hz.windows(2) {
        let lo = bin_for(pair[0]);
        let hi = bin_for(pair[1]).max(lo + 1).min(n_freqs);
        if lo < n_freqs {
            bands.push((lo, hi));
        }
    }
    bands
}

/// Mean spectral contrast across time frames and frequency sub-bands (dB)
///
/// For each frame and octave sub-band, the contrast is the difference in
/// dB between the mean of the top and bottom magnitude quantiles of the
/// band. Degenerate input (too short for one frame, all-zero) yields 0.
pub fn spectral_contrast(signal: &[f32], sample_rate: u32, config: &AnalysisConfig) -> f32 {
    let stft_matrix = match stft(signal, config.n_fft, config.hop_length, config.win_length) {
        Ok(m) => m,
        Err(_) => return 0.0,
    };
    let magnitudes = magnitude_spectrogram(&stft_matrix);
    let bands = band_edges(sample_rate, config.n_fft);

    let num_frames = magnitudes.shape()[1];
    if num_frames == 0 || bands.is_empty() {
        return 0.0;
    }

    let mut total = 0.0f64;
    let mut count = 0usize;
    let mut band_mags: Vec<f32> = Vec::new();

    for frame in 0..num_frames {
        for &(lo, hi) in &bands {
            band_mags.clear();
            band_mags.extend((lo..hi).map(|bin| magnitudes[[bin, frame]]));
            band_mags.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

            let n = ((band_mags.len() as f32 * CONTRAST_QUANTILE).round() as usize).max(1);
            let valley = band_mags[..n].iter().sum::<f32>() / n as f32;
            let peak = band_mags[band_mags.len() - n..].iter().sum::<f32>() / n as f32;

            let contrast_db =
                10.0 * (peak.max(AMIN).log10() - valley.max(AMIN).log10());
            total += contrast_db as f64;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        (total / count as f64) as f32
    }
}
