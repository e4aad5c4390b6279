//! Flowchart detector implementation
//!
//! Scores step, branching and approval vocabulary. Conditional phrasing such
//! as "if X, show Y" is the strongest cue.

use std::sync::OnceLock;

use crate::core::{Archetype, BonusRule, CompiledSignals, Detector, SignalRules, SignalScore};

static RULES: SignalRules = SignalRules {
    keywords: &[
        "if ", "then", "else", "step", "process", "decision", "start", "end", "flow", "when",
        "next", "begin", "check", "validate", "verify", "approve", "reject", "submit", "retry",
        "loop", "repeat",
    ],
    keyword_weight: 0.15,
    patterns: &[
        r"\bif\b.*\bthen\b",
        r"\bif\s+(yes|no|valid|invalid)\b",
        r"step\s*\d",
        // numbered steps
        r"\d\.\s+\w+",
        r"(first|second|third|finally|lastly)",
        r"(yes|no)\s*[,:]",
        r"if\s+(yes|no|true|false|valid|invalid)",
    ],
    pattern_weight: 0.25,
    bonus: BonusRule::Presence {
        pattern: r"if\s+\w+.*,\s*(do|show|go|redirect|return)",
        weight: 0.4,
    },
};

fn signals() -> &'static CompiledSignals {
    static SIGNALS: OnceLock<CompiledSignals> = OnceLock::new();
    SIGNALS.get_or_init(|| {
        CompiledSignals::compile(&RULES).expect("valid flowchart signal patterns")
    })
}

/// Flowchart detector implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct FlowchartDetector;

impl FlowchartDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for FlowchartDetector {
    fn archetype(&self) -> Archetype {
        Archetype::Flowchart
    }

    fn score(&self, lowered: &str) -> SignalScore {
        signals().score(lowered)
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULES.keywords.to_vec()
    }
}
