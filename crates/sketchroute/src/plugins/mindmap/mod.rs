//! Mind map diagram plugin

use crate::core::{Archetype, Detector, Diagram};
use std::sync::Arc;

mod builder;
mod detector;

pub use builder::*;
pub use detector::*;

/// Mind map diagram implementation
pub struct MindMapDiagram;

impl Diagram for MindMapDiagram {
    type Builder = MindMapBuilder;

    fn archetype() -> Archetype {
        Archetype::MindMap
    }

    fn detector() -> Option<Arc<dyn Detector>> {
        Some(Arc::new(MindMapDetector::new()))
    }

    fn create_builder() -> Self::Builder {
        MindMapBuilder::new()
    }

    fn version() -> &'static str {
        "0.1.0"
    }
}
