//! Timeline detector implementation
//!
//! Scores dates and history vocabulary. Two or more years earn a bonus,
//! three or more a larger one.

use std::sync::OnceLock;

use crate::core::{Archetype, BonusRule, CompiledSignals, Detector, SignalRules, SignalScore};

static RULES: SignalRules = SignalRules {
    keywords: &[
        "timeline", "history", "evolution", "milestone", "era", "chronolog", "founded",
        "launched", "released", "established",
    ],
    keyword_weight: 0.2,
    patterns: &[
        r"\b\d{4}\b",
        r"\b(january|february|march|april|may|june|july|august|september|october|november|december)\b",
        r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+\d",
        r"(before|after)\s+\d{4}",
        // "2008: something" or "2008 - something"
        r"\d{4}\s*[-–:]\s*\w+",
    ],
    pattern_weight: 0.25,
    bonus: BonusRule::Count {
        pattern: r"\b(19|20)\d{2}\b",
        tiers: &[(3, 0.4), (2, 0.2)],
    },
};

fn signals() -> &'static CompiledSignals {
    static SIGNALS: OnceLock<CompiledSignals> = OnceLock::new();
    SIGNALS.get_or_init(|| {
        CompiledSignals::compile(&RULES).expect("valid timeline signal patterns")
    })
}

/// Timeline detector implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct TimelineDetector;

impl TimelineDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for TimelineDetector {
    fn archetype(&self) -> Archetype {
        Archetype::Timeline
    }

    fn score(&self, lowered: &str) -> SignalScore {
        signals().score(lowered)
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULES.keywords.to_vec()
    }
}
