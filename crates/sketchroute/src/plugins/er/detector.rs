//! Entity-relationship detector implementation
//!
//! Scores schema vocabulary. Repeated "has many"/"belongs to"/"has one"
//! phrases earn a bonus.

use std::sync::OnceLock;

use crate::core::{Archetype, BonusRule, CompiledSignals, Detector, SignalRules, SignalScore};

static RULES: SignalRules = SignalRules {
    keywords: &[
        "entity", "relationship", "has many", "belongs to", "one to many", "many to many",
        "one to one", "attributes", "fields", "table", "schema", "foreign key", "primary key",
        "column", "record",
    ],
    keyword_weight: 0.2,
    patterns: &[
        r"(has\s+many|belongs\s+to|has\s+one)",
        r"(one|many)\s+to\s+(one|many)",
        r"entity\s+\w+\s+has",
        r"(table|entity)\s+\w+",
        r"attributes?\s*[:=]",
    ],
    pattern_weight: 0.3,
    bonus: BonusRule::Count {
        pattern: r"(has\s+many|belongs\s+to|has\s+one)",
        tiers: &[(2, 0.4)],
    },
};

fn signals() -> &'static CompiledSignals {
    static SIGNALS: OnceLock<CompiledSignals> = OnceLock::new();
    SIGNALS.get_or_init(|| CompiledSignals::compile(&RULES).expect("valid er signal patterns"))
}

/// Entity-relationship detector implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct ErDetector;

impl ErDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Detector for ErDetector {
    fn archetype(&self) -> Archetype {
        Archetype::EntityRelationship
    }

    fn score(&self, lowered: &str) -> SignalScore {
        signals().score(lowered)
    }

    fn patterns(&self) -> Vec<&'static str> {
        RULES.keywords.to_vec()
    }
}
