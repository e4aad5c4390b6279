//! Sequence diagram plugin
//!
//! Participants exchanging ordered messages.

use crate::core::{Archetype, Detector, Diagram};
use std::sync::Arc;

mod builder;
mod detector;

pub use builder::*;
pub use detector::*;

/// Sequence diagram implementation
pub struct SequenceDiagram;

impl Diagram for SequenceDiagram {
    type Builder = SequenceBuilder;

    fn archetype() -> Archetype {
        Archetype::Sequence
    }

    fn detector() -> Option<Arc<dyn Detector>> {
        Some(Arc::new(SequenceDetector::new()))
    }

    fn create_builder() -> Self::Builder {
        SequenceBuilder::new()
    }

    fn version() -> &'static str {
        "0.1.0"
    }
}
