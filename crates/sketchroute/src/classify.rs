//! Archetype classification
//!
//! Runs every registered detector over the same lowercased text and picks
//! the highest score. Scores below the configured threshold resolve to the
//! `simple` archetype instead of an error, so classification is total over
//! all input strings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, span, Level};

use crate::core::{Archetype, Detector, SignalScore};
use crate::plugins::detector_for;

/// Thresholds used when picking an archetype
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Minimum winning score; anything lower falls back to `simple`
    pub min_confidence: f64,
    /// Confidence reported for the `simple` fallback
    pub fallback_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.2,
            fallback_confidence: 0.5,
        }
    }
}

/// Outcome of classifying one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "diagram_type")]
    pub archetype: Archetype,
    /// In [0, 1], rounded to two decimals
    pub confidence: f64,
    pub reasoning: String,
}

impl ClassificationResult {
    /// Result for a caller-chosen archetype, bypassing detection
    pub fn forced(archetype: Archetype) -> Self {
        Self {
            archetype,
            confidence: 1.0,
            reasoning: format!("Forced diagram type: {}", archetype),
        }
    }
}

/// One detector's score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchetypeScore {
    #[serde(rename = "diagram_type")]
    pub archetype: Archetype,
    #[serde(flatten)]
    pub signals: SignalScore,
}

/// Round a clamped score to two decimals
pub fn round_confidence(score: f64) -> f64 {
    (score.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Arg-max classifier over a list of detectors
///
/// Detectors are evaluated in registration order and an exact tie keeps the
/// earlier one.
///
/// # Example
/// ```
/// use sketchroute::classify::Classifier;
/// use sketchroute::core::Archetype;
///
/// let result = Classifier::new().classify("Founded 2018, launched 2020, released 2022");
/// assert_eq!(result.archetype, Archetype::Timeline);
/// assert_eq!(result.confidence, 1.0);
/// ```
#[derive(Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    detectors: Vec<Arc<dyn Detector>>,
}

impl Classifier {
    /// Classifier with every built-in detector and default thresholds
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Classifier with every built-in detector
    pub fn with_config(config: ClassifierConfig) -> Self {
        let mut classifier = Self::empty(config);
        classifier.register_builtin();
        classifier
    }

    /// Append every built-in detector in evaluation order
    pub fn register_builtin(&mut self) {
        for archetype in Archetype::DETECTABLE {
            if let Some(detector) = detector_for(archetype) {
                self.register(detector);
            }
        }
    }

    /// Classifier without detectors; every text classifies as `simple`
    pub fn empty(config: ClassifierConfig) -> Self {
        Self {
            config,
            detectors: Vec::new(),
        }
    }

    /// Append a detector to the evaluation order
    pub fn register(&mut self, detector: Arc<dyn Detector>) {
        self.detectors.push(detector);
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Archetypes with a registered detector, in evaluation order
    pub fn archetypes(&self) -> Vec<Archetype> {
        self.detectors.iter().map(|d| d.archetype()).collect()
    }

    /// Every detector's score, in evaluation order
    pub fn scores(&self, text: &str) -> Vec<ArchetypeScore> {
        let lowered = text.to_lowercase();
        self.detectors
            .iter()
            .map(|detector| ArchetypeScore {
                archetype: detector.archetype(),
                signals: detector.score(&lowered),
            })
            .collect()
    }

    /// Pick the archetype for `text`
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let classify_span = span!(Level::INFO, "classify", input_len = text.len());
        let _enter = classify_span.enter();

        let mut best: Option<ArchetypeScore> = None;
        for score in self.scores(text) {
            debug!(
                archetype = %score.archetype,
                score = score.signals.total,
                keyword_hits = score.signals.keyword_hits,
                pattern_hits = score.signals.pattern_hits,
                bonus = score.signals.bonus,
                "Archetype scored"
            );
            if best.map_or(true, |b| score.signals.total > b.signals.total) {
                best = Some(score);
            }
        }

        match best {
            Some(best) if best.signals.total >= self.config.min_confidence => {
                let result = ClassificationResult {
                    archetype: best.archetype,
                    confidence: round_confidence(best.signals.total),
                    reasoning: best.archetype.reasoning().to_string(),
                };
                info!(
                    archetype = %result.archetype,
                    confidence = result.confidence,
                    "Classified text"
                );
                result
            }
            _ => {
                info!(
                    best = best.map_or(0.0, |b| b.signals.total),
                    threshold = self.config.min_confidence,
                    "No archetype cleared the threshold, using simple"
                );
                ClassificationResult {
                    archetype: Archetype::Simple,
                    confidence: self.config.fallback_confidence,
                    reasoning: Archetype::Simple.reasoning().to_string(),
                }
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
