//! Entity-relationship diagram plugin
//!
//! Entities with placeholder attributes and 1:N relationships.

use crate::core::{Archetype, Detector, Diagram};
use std::sync::Arc;

mod builder;
mod detector;

pub use builder::*;
pub use detector::*;

/// Entity-relationship diagram implementation
pub struct ErDiagram;

impl Diagram for ErDiagram {
    type Builder = ErBuilder;

    fn archetype() -> Archetype {
        Archetype::EntityRelationship
    }

    fn detector() -> Option<Arc<dyn Detector>> {
        Some(Arc::new(ErDetector::new()))
    }

    fn create_builder() -> Self::Builder {
        ErBuilder::new()
    }

    fn version() -> &'static str {
        "0.1.0"
    }
}
