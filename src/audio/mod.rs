//! Audio processing module for voxmetric
//!
//! Provides WAV I/O, resampling, and the DSP primitives used by feature
//! extraction.

pub mod dsp;
mod io;
mod resample;

pub use dsp::{apply_preemphasis, compute_rms, energy_track};
pub use io::{load_audio, save_audio, AudioData};
pub use resample::{resample, resample_to_16k};
