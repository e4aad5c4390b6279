//! Declarative signal scoring
//!
//! Each archetype describes its cues as a [`SignalRules`] table: keywords
//! checked by substring membership, regex patterns checked by presence, and
//! an optional count-based bonus. [`CompiledSignals`] turns a table into
//! ready-to-run regexes and scores lowercased text against it.

use regex::Regex;
use serde::Serialize;
use tracing::trace;

/// Upper bound of any archetype score
pub const MAX_SCORE: f64 = 1.0;

/// Extra weight for a strong structural cue
#[derive(Debug, Clone, Copy)]
pub enum BonusRule {
    None,
    /// Added once when `pattern` matches anywhere
    Presence { pattern: &'static str, weight: f64 },
    /// Added when `pattern` matches at least `n` times; tiers are checked in
    /// order and the first satisfied one applies
    Count {
        pattern: &'static str,
        tiers: &'static [(usize, f64)],
    },
}

/// Keyword, pattern and bonus table for one archetype
#[derive(Debug, Clone, Copy)]
pub struct SignalRules {
    pub keywords: &'static [&'static str],
    pub keyword_weight: f64,
    pub patterns: &'static [&'static str],
    pub pattern_weight: f64,
    pub bonus: BonusRule,
}

/// Breakdown of one archetype's score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SignalScore {
    pub keyword_hits: usize,
    pub pattern_hits: usize,
    pub bonus: f64,
    /// Sum of all contributions, clamped to [`MAX_SCORE`]
    pub total: f64,
}

/// A [`SignalRules`] table with its regexes compiled
#[derive(Debug)]
pub struct CompiledSignals {
    rules: &'static SignalRules,
    patterns: Vec<Regex>,
    bonus: Option<Regex>,
}

impl CompiledSignals {
    /// Compile every pattern of `rules`
    pub fn compile(rules: &'static SignalRules) -> Result<Self, regex::Error> {
        let patterns = rules
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let bonus = match rules.bonus {
            BonusRule::None => None,
            BonusRule::Presence { pattern, .. } | BonusRule::Count { pattern, .. } => {
                Some(Regex::new(pattern)?)
            }
        };

        Ok(Self {
            rules,
            patterns,
            bonus,
        })
    }

    pub fn rules(&self) -> &'static SignalRules {
        self.rules
    }

    /// Score already-lowercased text
    pub fn score(&self, lowered: &str) -> SignalScore {
        let mut total = 0.0;

        let mut keyword_hits = 0;
        for keyword in self.rules.keywords {
            if lowered.contains(keyword) {
                keyword_hits += 1;
                total += self.rules.keyword_weight;
            }
        }

        let mut pattern_hits = 0;
        for pattern in &self.patterns {
            if pattern.is_match(lowered) {
                pattern_hits += 1;
                total += self.rules.pattern_weight;
            }
        }

        let bonus = self.bonus(lowered);
        total += bonus;

        trace!(keyword_hits, pattern_hits, bonus, raw = total, "Signals evaluated");

        SignalScore {
            keyword_hits,
            pattern_hits,
            bonus,
            total: total.min(MAX_SCORE),
        }
    }

    fn bonus(&self, lowered: &str) -> f64 {
        let Some(re) = &self.bonus else {
            return 0.0;
        };
        match self.rules.bonus {
            BonusRule::None => 0.0,
            BonusRule::Presence { weight, .. } => {
                if re.is_match(lowered) {
                    weight
                } else {
                    0.0
                }
            }
            BonusRule::Count { tiers, .. } => {
                let count = re.find_iter(lowered).count();
                tiers
                    .iter()
                    .find(|(min, _)| count >= *min)
                    .map_or(0.0, |(_, weight)| *weight)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: SignalRules = SignalRules {
        keywords: &["alpha", "beta"],
        keyword_weight: 0.15,
        patterns: &[r"\bgamma\b", r"delta\s+\d"],
        pattern_weight: 0.25,
        bonus: BonusRule::Count {
            pattern: r"\bx\b",
            tiers: &[(3, 0.4), (2, 0.2)],
        },
    };

    static PRESENCE: SignalRules = SignalRules {
        keywords: &[],
        keyword_weight: 0.0,
        patterns: &[],
        pattern_weight: 0.0,
        bonus: BonusRule::Presence {
            pattern: r"if\s+\w+",
            weight: 0.4,
        },
    };

    #[test]
    fn test_keywords_count_once_each() {
        let signals = CompiledSignals::compile(&RULES).unwrap();
        let score = signals.score("alpha alpha alpha");
        assert_eq!(score.keyword_hits, 1);
        assert!((score.total - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_patterns_add_weight() {
        let signals = CompiledSignals::compile(&RULES).unwrap();
        let score = signals.score("gamma and delta 4");
        assert_eq!(score.pattern_hits, 2);
        assert!((score.total - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_count_bonus_tiers() {
        let signals = CompiledSignals::compile(&RULES).unwrap();
        assert_eq!(signals.score("x").bonus, 0.0);
        assert_eq!(signals.score("x x").bonus, 0.2);
        assert_eq!(signals.score("x x x x").bonus, 0.4);
    }

    #[test]
    fn test_presence_bonus() {
        let signals = CompiledSignals::compile(&PRESENCE).unwrap();
        assert_eq!(signals.score("if valid").bonus, 0.4);
        assert_eq!(signals.score("nothing here").bonus, 0.0);
    }

    #[test]
    fn test_total_is_clamped() {
        let signals = CompiledSignals::compile(&RULES).unwrap();
        let score = signals.score("alpha beta gamma delta 1 x x x");
        assert_eq!(score.total, MAX_SCORE);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        static BROKEN: SignalRules = SignalRules {
            keywords: &[],
            keyword_weight: 0.1,
            patterns: &["(unclosed"],
            pattern_weight: 0.1,
            bonus: BonusRule::None,
        };
        assert!(CompiledSignals::compile(&BROKEN).is_err());
    }
}
