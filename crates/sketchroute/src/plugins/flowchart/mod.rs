//! Flowchart diagram plugin
//!
//! Processes, decisions and terminators in a top-to-bottom column.

use crate::core::{Archetype, Detector, Diagram};
use std::sync::Arc;

mod builder;
mod detector;

pub use builder::*;
pub use detector::*;

/// Flowchart diagram implementation
pub struct FlowchartDiagram;

impl Diagram for FlowchartDiagram {
    type Builder = FlowchartBuilder;

    fn archetype() -> Archetype {
        Archetype::Flowchart
    }

    fn detector() -> Option<Arc<dyn Detector>> {
        Some(Arc::new(FlowchartDetector::new()))
    }

    fn create_builder() -> Self::Builder {
        FlowchartBuilder::new()
    }

    fn version() -> &'static str {
        "0.1.0"
    }
}
