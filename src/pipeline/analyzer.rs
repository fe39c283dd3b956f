//! Quality analysis orchestration

use super::QualityReport;
use crate::asr::{AsrSession, Transcriber};
use crate::audio::{load_audio, AudioData};
use crate::config::Config;
use crate::features::FeatureSet;
use crate::scoring::{AccuracyScorer, ClarityScorer, EmotionScorer, Score};
use crate::Result;
use std::path::Path;
use std::sync::Arc;

/// Analyzes one recording and assembles a [`QualityReport`]
///
/// Clarity and emotion are always computed; accuracy only when a reference
/// text is supplied. Decode failures are fatal for the whole call, while a
/// failure inside any single metric is logged and mapped to a score of 0.0
/// so the remaining metrics still report.
pub struct QualityAnalyzer {
    clarity: ClarityScorer,
    emotion: EmotionScorer,
    accuracy: AccuracyScorer,
    config: Config,
}

impl QualityAnalyzer {
    /// Create an analyzer, acquiring the ASR model once at startup
    pub fn new(config: Config) -> Result<Self> {
        let session = AsrSession::load(&config.asr)?;
        Self::with_transcriber(config, Arc::new(session))
    }

    /// Create an analyzer with an injected transcription capability
    pub fn with_transcriber(config: Config, transcriber: Arc<dyn Transcriber>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            clarity: ClarityScorer::new(&config.scoring),
            emotion: EmotionScorer::new(&config.scoring),
            accuracy: AccuracyScorer::new(transcriber, config.asr.sample_rate),
            config,
        })
    }

    /// Analyze an audio file
    ///
    /// The file is decoded and resampled to the analysis rate once; a
    /// decode failure is returned as an error and no report is produced.
    pub fn analyze<P: AsRef<Path>>(
        &self,
        path: P,
        reference_text: Option<&str>,
    ) -> Result<QualityReport> {
        let path = path.as_ref();
        log::info!("Analyzing {}", path.display());

        let audio = load_audio(path, Some(self.config.analysis.sample_rate))?;
        log::debug!(
            "Decoded {:.2}s at {} Hz",
            audio.duration(),
            audio.sample_rate
        );

        Ok(self.analyze_samples(&audio, reference_text))
    }

    /// Analyze an in-memory waveform
    ///
    /// Never fails: per-metric failures degrade to 0.0 with a diagnostic.
    pub fn analyze_samples(
        &self,
        audio: &AudioData,
        reference_text: Option<&str>,
    ) -> QualityReport {
        let (clarity, emotion) = match FeatureSet::extract(audio, &self.config.analysis) {
            Ok(features) => {
                log::debug!("Extracted features: {:?}", features);
                (self.clarity.score(&features), self.emotion.score(&features))
            }
            Err(e) => {
                log::warn!("Feature extraction failed: {}", e);
                (Score::ZERO, Score::ZERO)
            }
        };

        let wer = reference_text
            .filter(|text| !text.is_empty())
            .map(|text| match self.accuracy.score(audio, text) {
                Ok(score) => score,
                Err(e) => {
                    log::warn!("Accuracy scoring failed: {}", e);
                    Score::ZERO
                }
            });

        QualityReport {
            clarity,
            emotion,
            wer,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
