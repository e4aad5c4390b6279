//! Sequence detector implementation
//!
//! Scores message-passing vocabulary. Several "X to Y" phrases in one text
//! earn an extra bonus.

use std::sync::OnceLock;

use crate::core::{Archetype, BonusRule, CompiledSignals, Detector, SignalRules, SignalScore};

static RULES: SignalRules = SignalRules {
    keywords: &[
        "sends", "receives", "request", "response", "calls", "returns", "message", "actor",
        "reply", "acknowledge", "notify", "publish", "subscribe", "emit", "trigger", "callback",
        "webhook",
    ],
    keyword_weight: 0.15,
    patterns: &[
        // "A sends X to B"
        r"\w+\s+sends?\s+\w+\s+to\s+\w+",
        // "A calls B"
        r"\w+\s+(calls?|requests?)\s+\w+",
        r"\w+\s+returns?\s+\w+",
        r"\w+\s+responds?\s+(with|to)\s+",
        r"(request|response)\s+(from|to)\s+",
    ],
    pattern_weight: 0.3,
    bonus: BonusRule::Count {
        pattern: r"\b\w+\s+to\s+\w+\b",
        tiers: &[(3, 0.3)],
    },
};

fn signals() -> &'static CompiledSignals {
    static SIGNALS: OnceLock<CompiledSignals> = OnceLock::new();
    SIGNALS.get_or_init(|| {
        CompiledSignals::compile(&RULES).expect("valid sequence signal patterns")
    })
}

/// Sequence detector implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceDetector;

impl SequenceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for SequenceDetector {
    fn archetype(&self) -> Archetype {
        Archetype::Sequence
    }

    fn score(&self, lowered: &str) -> SignalScore {
        signals().score(lowered)
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULES.keywords.to_vec()
    }
}
