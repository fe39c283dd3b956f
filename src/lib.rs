//! voxmetric - Objective quality scoring for spoken-audio recordings
//!
//! Computes a small set of quality scores for a single recording:
//! perceptual clarity, emotional expressiveness, and (optionally)
//! transcription accuracy against a reference text.
//!
//! # Example
//! ```no_run
//! use voxmetric::{Config, QualityAnalyzer};
//!
//! let analyzer = QualityAnalyzer::new(Config::default()).unwrap();
//! let report = analyzer.analyze("narration.wav", Some("once upon a time")).unwrap();
//! println!("clarity: {}", report.clarity.value());
//! ```

// Allow traditional for loops - often clearer for audio DSP code
#![allow(clippy::needless_range_loop)]

pub mod asr;
pub mod audio;
pub mod config;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod scoring;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{QualityAnalyzer, QualityReport};
pub use scoring::Score;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default sample rate for analysis
pub const SAMPLE_RATE: u32 = 22050;

/// Sample rate expected by the ASR collaborator
pub const ASR_SAMPLE_RATE: u32 = 16000;

/// Default FFT size for short-time analysis
pub const N_FFT: usize = 2048;

/// Default hop length between analysis frames
pub const HOP_LENGTH: usize = 512;

/// Default window size
pub const WIN_LENGTH: usize = 2048;
