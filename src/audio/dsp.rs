//! Digital Signal Processing utilities

/// Apply pre-emphasis filter to audio signal
///
/// y[n] = x[n] - coef * x[n-1]
///
/// # Arguments
/// * `signal` - Input audio signal
/// * `coef` - Pre-emphasis coefficient (typically 0.97)
pub fn apply_preemphasis(signal: &[f32], coef: f32) -> Vec<f32> {
    if signal.is_empty() {
        return vec![];
    }

    let mut output = Vec::with_capacity(signal.len());
    output.push(signal[0]);

    for i in 1..signal.len() {
        output.push(signal[i] - coef * signal[i - 1]);
    }

    output
}

/// Compute RMS energy of a signal
pub fn compute_rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }
    (signal.iter().map(|x| x * x).sum::<f32>() / signal.len() as f32).sqrt()
}

/// Compute frame-wise RMS energy
///
/// Produces one value per window of `frame_length` samples, advancing by
/// `hop_length`. A signal shorter than one frame yields a single value
/// over the whole signal.
pub fn energy_track(signal: &[f32], frame_length: usize, hop_length: usize) -> Vec<f32> {
    if signal.is_empty() || frame_length == 0 || hop_length == 0 {
        return vec![];
    }

    if signal.len() < frame_length {
        return vec![compute_rms(signal)];
    }

    (0..=signal.len() - frame_length)
        .step_by(hop_length)
        .map(|start| compute_rms(&signal[start..start + frame_length]))
        .collect()
}
