//! Core diagram trait for all archetypes
//!
//! This trait ties an archetype to its detector and layout builder so the
//! orchestrator can register a plugin as one unit.

use std::sync::Arc;

use super::{Archetype, Detector, LayoutBuilder};

/// Core trait for diagram archetype plugins
///
/// # Example
/// ```
/// use sketchroute::core::{Archetype, Diagram};
/// use sketchroute::plugins::flowchart::FlowchartDiagram;
///
/// assert_eq!(FlowchartDiagram::archetype(), Archetype::Flowchart);
/// assert!(FlowchartDiagram::detector().is_some());
/// ```
pub trait Diagram: Send + Sync {
    /// The layout builder for this archetype
    type Builder: LayoutBuilder + 'static;

    /// The archetype this plugin implements
    fn archetype() -> Archetype;

    /// Get the detector for this archetype; `None` for fallback-only archetypes
    fn detector() -> Option<Arc<dyn Detector>>;

    /// Create a new builder instance
    fn create_builder() -> Self::Builder;

    /// Get the name of this archetype
    fn name() -> &'static str {
        Self::archetype().as_str()
    }

    /// Get the version of this plugin
    fn version() -> &'static str;
}
