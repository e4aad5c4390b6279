//! Simple diagram plugin
//!
//! Only reachable through fallback, so it registers a builder and no
//! detector.

use crate::core::{Archetype, Detector, Diagram};
use std::sync::Arc;

mod builder;

pub use builder::*;

/// Simple diagram implementation
pub struct SimpleDiagram;

impl Diagram for SimpleDiagram {
    type Builder = SimpleBuilder;

    fn archetype() -> Archetype {
        Archetype::Simple
    }

    fn detector() -> Option<Arc<dyn Detector>> {
        None
    }

    fn create_builder() -> Self::Builder {
        SimpleBuilder::new()
    }

    fn version() -> &'static str {
        "0.1.0"
    }
}
