//! Fundamental-frequency estimation (YIN)
//!
//! Frame-wise period estimation using the YIN difference function with
//! cumulative-mean normalization and parabolic refinement. Frames without
//! a reliable pitch candidate are reported as 0.

use crate::config::AnalysisConfig;

/// Cumulative-mean normalized difference below this value counts as a
/// confident period candidate
const TROUGH_THRESHOLD: f32 = 0.1;

/// Fallback acceptance bound for the global minimum when no trough drops
/// below `TROUGH_THRESHOLD`
const FALLBACK_THRESHOLD: f32 = 0.5;

/// Frame-wise fundamental-frequency track in Hz
///
/// One estimate per analysis frame (`n_fft` window, `hop_length` hop).
/// Unvoiced or degenerate frames yield 0.0.
pub fn pitch_track(signal: &[f32], sample_rate: u32, config: &AnalysisConfig) -> Vec<f32> {
    let frame_length = config.n_fft;
    let hop_length = config.hop_length;
    if signal.len() < frame_length || sample_rate == 0 {
        return vec![];
    }

    let window = frame_length / 2;
    let tau_min = ((sample_rate as f32 / config.pitch_fmax).floor() as usize).max(1);
    let tau_max = ((sample_rate as f32 / config.pitch_fmin).ceil() as usize).min(window - 1);
    if tau_min >= tau_max {
        return vec![];
    }

    (0..=signal.len() - frame_length)
        .step_by(hop_length)
        .map(|start| estimate_f0(&signal[start..start + frame_length], sample_rate, tau_min, tau_max))
        .collect()
}

/// Estimate the fundamental frequency of one frame, or 0.0 if unvoiced
fn estimate_f0(frame: &[f32], sample_rate: u32, tau_min: usize, tau_max: usize) -> f32 {
    let window = frame.len() / 2;

    // Difference function d(tau)
    let mut diff = vec![0.0f32; tau_max + 1];
    for tau in 1..=tau_max {
        let mut sum = 0.0f32;
        for j in 0..window {
            let delta = frame[j] - frame[j + tau];
            sum += delta * delta;
        }
        diff[tau] = sum;
    }

    // Cumulative-mean normalized difference d'(tau)
    let mut cmndf = vec![1.0f32; tau_max + 1];
    let mut running_sum = 0.0f32;
    for tau in 1..=tau_max {
        running_sum += diff[tau];
        // Silent frames have a zero running sum; leave d' at 1 (unvoiced)
        if running_sum > 0.0 {
            cmndf[tau] = diff[tau] * tau as f32 / running_sum;
        }
    }

    // First trough under the threshold, descended to its local minimum
    let mut tau_est = None;
    let mut tau = tau_min;
    while tau <= tau_max {
        if cmndf[tau] < TROUGH_THRESHOLD {
            while tau + 1 <= tau_max && cmndf[tau + 1] < cmndf[tau] {
                tau += 1;
            }
            tau_est = Some(tau);
            break;
        }
        tau += 1;
    }

    // Fallback: accept the global minimum only if it is reasonably deep
    let tau_est = match tau_est {
        Some(t) => t,
        None => {
            let (best_tau, best_val) = (tau_min..=tau_max)
                .map(|t| (t, cmndf[t]))
                .fold((tau_min, f32::MAX), |acc, x| if x.1 < acc.1 { x } else { acc });
            if best_val < FALLBACK_THRESHOLD {
                best_tau
            } else {
                return 0.0;
            }
        }
    };

    let refined = parabolic_refine(&cmndf, tau_est, tau_min, tau_max);
    if refined > 0.0 {
        sample_rate as f32 / refined
    } else {
        0.0
    }
}

/// Parabolic interpolation of the minimum around `tau`
fn parabolic_refine(cmndf: &[f32], tau: usize, tau_min: usize, tau_max: usize) -> f32 {
    if tau <= tau_min || tau >= tau_max {
        return tau as f32;
    }

    let left = cmndf[tau - 1];
    let center = cmndf[tau];
    let right = cmndf[tau + 1];
    let denom = left + right - 2.0 * center;
    if denom.abs() < 1e-12 {
        return tau as f32;
    }

    let offset = 0.5 * (left - right) / denom;
    // Reject pathological fits outside the neighboring samples
    if offset.abs() > 1.0 {
        return tau as f32;
    }
    tau as f32 + offset
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

    fn voiced(track: &[f32]) -> Vec<f32> {
        track.iter().copied().filter(|&f| f > 0.0).collect()
    }

    #[test]
    fn test_pitch_of_pure_tone() {
        let config = AnalysisConfig::default();
        let signal = sine(220.0, 22050, 1.0);
        let track = pitch_track(&signal, 22050, &config);
        let voiced = voiced(&track);

        assert!(!voiced.is_empty());
        let mean = voiced.iter().sum::<f32>() / voiced.len() as f32;
        assert!(
            (mean - 220.0).abs() < 5.0,
            "estimated {} Hz for a 220 Hz tone",
            mean
        );
    }

    #[test]
    fn test_pitch_of_low_tone() {
        let config = AnalysisConfig::default();
        let signal = sine(110.0, 22050, 1.0);
        let track = pitch_track(&signal, 22050, &config);
        let voiced = voiced(&track);

        assert!(!voiced.is_empty());
        let mean = voiced.iter().sum::<f32>() / voiced.len() as f32;
        assert!((mean - 110.0).abs() < 5.0, "estimated {} Hz", mean);
    }

    #[test]
    fn test_silence_is_unvoiced() {
        let config = AnalysisConfig::default();
        let track = pitch_track(&vec![0.0; 22050], 22050, &config);
        assert!(!track.is_empty());
        assert!(track.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_signal_shorter_than_frame_yields_no_track() {
        let config = AnalysisConfig::default();
        let track = pitch_track(&sine(220.0, 22050, 0.01), 22050, &config);
        assert!(track.is_empty());
    }

    #[test]
    fn test_alternating_tones_vary_more_than_steady_tone() {
        let config = AnalysisConfig::default();

        let steady = sine(220.0, 22050, 1.0);
        let mut alternating = sine(150.0, 22050, 0.5);
        alternating.extend(sine(400.0, 22050, 0.5));

        let steady_voiced = voiced(&pitch_track(&steady, 22050, &config));
        let varied_voiced = voiced(&pitch_track(&alternating, 22050, &config));

        let std = |v: &[f32]| {
            let m = v.iter().sum::<f32>() / v.len() as f32;
            (v.iter().map(|x| (x - m).powi(2)).sum::<f32>() / v.len() as f32).sqrt()
        };

        assert!(std(&varied_voiced) > std(&steady_voiced));
    }
}
