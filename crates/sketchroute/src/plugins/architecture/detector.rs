//! Architecture detector implementation
//!
//! Scores system vocabulary: services, tiers, protocols and the verbs used to
//! say one component talks to another.

use std::sync::OnceLock;

use crate::core::{Archetype, BonusRule, CompiledSignals, Detector, SignalRules, SignalScore};

static RULES: SignalRules = SignalRules {
    keywords: &[
        "service", "database", "api", "frontend", "backend", "server", "client", "layer",
        "component", "system", "microservice", "gateway", "queue", "cache", "load balancer",
        "proxy", "container", "cluster", "rest", "grpc", "graphql", "webhook", "endpoint",
    ],
    keyword_weight: 0.15,
    patterns: &[
        r"(front.?end|back.?end)",
        r"(micro.?service|web.?server)",
        r"(api|db|cdn|dns|ssl|http|tcp)\b",
        r"(connects?\s+to|communicates?\s+with|talks?\s+to)",
        r"(layer|tier)\s*\d",
    ],
    pattern_weight: 0.25,
    bonus: BonusRule::None,
};

fn signals() -> &'static CompiledSignals {
    static SIGNALS: OnceLock<CompiledSignals> = OnceLock::new();
    SIGNALS.get_or_init(|| {
        CompiledSignals::compile(&RULES).expect("valid architecture signal patterns")
    })
}

/// Architecture detector implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchitectureDetector;

impl ArchitectureDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for ArchitectureDetector {
    fn archetype(&self) -> Archetype {
        Archetype::Architecture
    }

    fn score(&self, lowered: &str) -> SignalScore {
        signals().score(lowered)
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULES.keywords.to_vec()
    }
}
