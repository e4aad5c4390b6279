//! Core detector trait for archetype signal extraction
//!
//! This trait defines the interface each archetype implements to score how
//! strongly a description matches it.

use super::{Archetype, SignalScore};

/// Core trait for archetype detectors
///
/// A detector evaluates its archetype's keyword/pattern/bonus signals over
/// lowercased text. Detectors are independent: no detector looks at another
/// archetype's score.
///
/// # Example
/// ```
/// use sketchroute::core::Detector;
/// use sketchroute::plugins::timeline::TimelineDetector;
///
/// let detector = TimelineDetector::new();
/// assert!(detector.confidence("Founded 2018, launched 2020, released 2022") > 0.9);
/// ```
pub trait Detector: Send + Sync {
    /// The archetype this detector scores
    fn archetype(&self) -> Archetype;

    /// Score already-lowercased text
    fn score(&self, lowered: &str) -> SignalScore;

    /// Clamped score (0.0 to 1.0) for raw input text
    fn confidence(&self, input: &str) -> f64 {
        self.score(&input.to_lowercase()).total
    }

    /// Whether the input clears `threshold`
    fn detect(&self, input: &str, threshold: f64) -> bool {
        self.confidence(input) >= threshold
    }

    /// Get the diagram type name
    fn diagram_type(&self) -> &'static str {
        self.archetype().as_str()
    }

    /// Keywords this detector looks for
    fn patterns(&self) -> Vec<&'static str>;
}
