//! Mind map detector implementation
//!
//! Scores hierarchy and breakdown vocabulary. Parenthesized sub-topic lists
//! such as "Topic (a, b)" are the strongest cue.

use std::sync::OnceLock;

use crate::core::{Archetype, BonusRule, CompiledSignals, Detector, SignalRules, SignalScore};

static RULES: SignalRules = SignalRules {
    keywords: &[
        "aspects of", "categories", "branches", "related to", "subtopics", "brainstorm", "ideas",
        "concepts", "topics", "main topic", "central", "branching", "hierarchy", "breakdown",
        "subdivisions", "mind map", "mindmap", "overview of", "types of", "kinds of",
        "areas of", "components of", "parts of", "elements of",
    ],
    keyword_weight: 0.2,
    patterns: &[
        r"aspects?\s+of\s+",
        r"main\s+(topic|concept|idea)",
        r"central\s+(concept|idea|theme)",
        r"branches?\s+(into|to|of)",
        r"subdivided\s+into",
        r"related\s+(concepts|ideas|topics)",
        r"has\s+branches",
        r"types?\s+of\s+",
        // "Topic (sub1, sub2)"
        r"\w+\s*\([^)]+,\s*[^)]+\)",
    ],
    pattern_weight: 0.3,
    bonus: BonusRule::Count {
        pattern: r"\w+\s*\([^)]+,\s*[^)]+\)",
        tiers: &[(2, 0.4)],
    },
};

fn signals() -> &'static CompiledSignals {
    static SIGNALS: OnceLock<CompiledSignals> = OnceLock::new();
    SIGNALS.get_or_init(|| {
        CompiledSignals::compile(&RULES).expect("valid mindmap signal patterns")
    })
}

/// Mind map detector implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct MindMapDetector;

impl MindMapDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for MindMapDetector {
    fn archetype(&self) -> Archetype {
        Archetype::MindMap
    }

    fn score(&self, lowered: &str) -> SignalScore {
        signals().score(lowered)
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULES.keywords.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_subtopics() {
        let detector = MindMapDetector::new();
        let score = detector.score("fruit (apple, pear) and veg (kale, leek)");
        assert_eq!(score.bonus, 0.4);
        assert_eq!(score.pattern_hits, 1);
        assert!((score.total - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_single_group_gets_no_bonus() {
        let detector = MindMapDetector::new();
        assert_eq!(detector.score("fruit (apple, pear)").bonus, 0.0);
    }

    #[test]
    fn test_breakdown_vocabulary() {
        let detector = MindMapDetector::new();
        let confidence = detector.confidence("Main topic: aspects of remote work");
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_unrelated_text() {
        let detector = MindMapDetector::new();
        assert!(!detector.detect("deploy the api", 0.2));
    }
}
