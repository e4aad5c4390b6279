//! Architecture diagram plugin
//!
//! System components on a grid, linked by the connections between them.

use crate::core::{Archetype, Detector, Diagram};
use std::sync::Arc;

mod builder;
mod detector;

pub use builder::*;
pub use detector::*;

/// Architecture diagram implementation
pub struct ArchitectureDiagram;

impl Diagram for ArchitectureDiagram {
    type Builder = ArchitectureBuilder;

    fn archetype() -> Archetype {
        Archetype::Architecture
    }

    fn detector() -> Option<Arc<dyn Detector>> {
        Some(Arc::new(ArchitectureDetector::new()))
    }

    fn create_builder() -> Self::Builder {
        ArchitectureBuilder::new()
    }

    fn version() -> &'static str {
        "0.1.0"
    }
}
