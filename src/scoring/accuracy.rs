//! Transcription accuracy scoring
//!
//! Compares an ASR transcription against a reference text using
//! case-folded, whitespace-tokenized word sets. This is a deliberate
//! simplification versus alignment-based word error rate: duplicate
//! occurrences collapse and the error count is the cardinality of the
//! set symmetric difference.

use super::Score;
use crate::asr::Transcriber;
use crate::audio::{resample, AudioData};
use crate::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Scores transcription accuracy in [0, 1]
pub struct AccuracyScorer {
    transcriber: Arc<dyn Transcriber>,
    /// Sample rate the transcriber expects
    target_rate: u32,
}

impl AccuracyScorer {
    /// Create a scorer around an ASR collaborator
    pub fn new(transcriber: Arc<dyn Transcriber>, target_rate: u32) -> Self {
        Self {
            transcriber,
            target_rate,
        }
    }

    /// Transcribe the waveform and score it against the reference text
    ///
    /// The waveform is resampled to the transcriber's expected rate first.
    /// Resampling or transcription failures propagate to the caller, which
    /// applies the degraded-metric policy.
    pub fn score(&self, audio: &AudioData, reference: &str) -> Result<Score> {
        let resampled;
        let input = if audio.sample_rate == self.target_rate {
            audio
        } else {
            resampled = resample(audio, self.target_rate)?;
            &resampled
        };

        let hypothesis = self.transcriber.transcribe(input)?;
        log::debug!("Transcription: {:?}", hypothesis);

        Ok(word_set_accuracy(reference, &hypothesis))
    }
}

impl std::fmt::Debug for AccuracyScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccuracyScorer")
            .field("target_rate", &self.target_rate)
            .finish()
    }
}

/// Word-set accuracy between a reference and a hypothesis text
///
/// `errors = |reference_words symmetric-difference hypothesis_words|`,
/// `wer = errors / |reference_words|` (1.0 for an empty reference), and
/// the returned score is `1 - wer` clamped to [0, 1]. The clamp matters:
/// a hypothesis much larger than the reference can push the raw value
/// below zero.
pub fn word_set_accuracy(reference: &str, hypothesis: &str) -> Score {
    let reference = reference.to_lowercase();
    let hypothesis = hypothesis.to_lowercase();

    let reference_words: HashSet<&str> = reference.split_whitespace().collect();
    let hypothesis_words: HashSet<&str> = hypothesis.split_whitespace().collect();

    let errors = reference_words
        .symmetric_difference(&hypothesis_words)
        .count();

    let word_error_rate = if reference_words.is_empty() {
        1.0
    } else {
        errors as f32 / reference_words.len() as f32
    };

    Score::new(1.0 - word_error_rate)
}
