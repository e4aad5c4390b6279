//! Timeline diagram plugin
//!
//! Dated events and milestones along a horizontal axis, in input order.

use crate::core::{Archetype, Detector, Diagram};
use std::sync::Arc;

mod builder;
mod detector;

pub use builder::*;
pub use detector::*;

/// Timeline diagram implementation
pub struct TimelineDiagram;

impl Diagram for TimelineDiagram {
    type Builder = TimelineBuilder;

    fn archetype() -> Archetype {
        Archetype::Timeline
    }

    fn detector() -> Option<Arc<dyn Detector>> {
        Some(Arc::new(TimelineDetector::new()))
    }

    fn create_builder() -> Self::Builder {
        TimelineBuilder::new()
    }

    fn version() -> &'static str {
        "0.1.0"
    }
}
