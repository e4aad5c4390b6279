//! Property-based invariant tests for classification and layout.
//!
//! 1. Confidence stays in [0, 1] and is rounded to hundredths.
//! 2. Classification is idempotent.
//! 3. A sub-threshold best score always yields simple/0.5.
//! 4. Built models never hold dangling edges or duplicate ids.
//! 5. Flowcharts start with Start and end with End.

use proptest::prelude::*;
use sketchroute::classify::Classifier;
use sketchroute::core::{Archetype, Connection, Database, DiagramInput, NodeRole};
use sketchroute::plugins::builder_for;

// ── Helpers ─────────────────────────────────────────────────────────────

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-z0-9 ,:()]{0,80}",
        prop::collection::vec(
            prop::sample::select(vec![
                "if", "then", "else", "api", "sends", "to", "2019", "2021", "has many",
                "belongs to", "aspects of", "(a, b)", "server", "step 1", "launched",
            ]),
            0..12
        )
        .prop_map(|words| words.join(" ")),
    ]
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,12}"
}

fn input_strategy() -> impl Strategy<Value = DiagramInput> {
    (
        prop::collection::vec(label_strategy(), 0..8),
        prop::collection::vec((label_strategy(), label_strategy()), 0..8),
    )
        .prop_map(|(elements, pairs)| {
            let connections = pairs
                .into_iter()
                .map(|(from, to)| Connection::new(from, to))
                .collect();
            DiagramInput {
                elements,
                connections,
            }
        })
}

proptest! {
    #[test]
    fn confidence_is_bounded(text in text_strategy()) {
        let result = Classifier::new().classify(&text);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!(((result.confidence * 100.0).round() - result.confidence * 100.0).abs() < 1e-6);
    }

    #[test]
    fn classification_is_idempotent(text in text_strategy()) {
        let classifier = Classifier::new();
        prop_assert_eq!(classifier.classify(&text), classifier.classify(&text));
    }

    #[test]
    fn weak_text_is_simple(text in text_strategy()) {
        let classifier = Classifier::new();
        let best = classifier
            .scores(&text)
            .iter()
            .map(|s| s.signals.total)
            .fold(0.0, f64::max);
        let result = classifier.classify(&text);
        if best < 0.2 {
            prop_assert_eq!(result.archetype, Archetype::Simple);
            prop_assert_eq!(result.confidence, 0.5);
        } else {
            prop_assert_ne!(result.archetype, Archetype::Simple);
        }
    }

    #[test]
    fn models_are_consistent(input in input_strategy()) {
        for archetype in Archetype::ALL {
            let model = match builder_for(archetype).build(&input) {
                Ok(model) => model,
                Err(e) => return Err(TestCaseError::fail(format!("{archetype} failed: {e}"))),
            };
            for edge in model.edges() {
                prop_assert!(model.has_node(&edge.from));
                prop_assert!(model.has_node(&edge.to));
            }
        }
    }

    #[test]
    fn edges_never_exceed_connections(input in input_strategy()) {
        prop_assume!(!input.elements.is_empty() && !input.connections.is_empty());
        for archetype in [Archetype::Architecture, Archetype::EntityRelationship, Archetype::Simple] {
            let model = builder_for(archetype).build(&input).unwrap();
            prop_assert!(model.edge_count() <= input.connections.len());
        }
    }

    #[test]
    fn flowchart_is_bracketed(input in input_strategy()) {
        let model = builder_for(Archetype::Flowchart).build(&input).unwrap();
        let nodes = model.node_slice();
        prop_assert_eq!(&nodes[0].label, "Start");
        prop_assert_eq!(&nodes[nodes.len() - 1].label, "End");
        prop_assert_eq!(&nodes[0].role, &NodeRole::Terminator);
    }
}
