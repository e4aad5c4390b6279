//! Core layout builder trait
//!
//! A layout builder turns externally supplied elements and connections into a
//! positioned [`DiagramModel`] using fixed, archetype-specific placement rules.

use tracing::{debug, span, Level};

use super::{Archetype, Connection, DiagramError, DiagramInput, DiagramModel};

/// Core trait for layout builders
///
/// Builders are pure: the same input always yields the same model, and they
/// never consult the text that was classified.
///
/// # Example
/// ```
/// use sketchroute::core::{Database, DiagramInput, LayoutBuilder};
/// use sketchroute::plugins::sequence::SequenceBuilder;
///
/// let model = SequenceBuilder::new().build(&DiagramInput::new()).unwrap();
/// assert_eq!(model.node_count(), 2);
/// ```
pub trait LayoutBuilder: Send + Sync {
    /// The archetype this builder lays out
    fn archetype(&self) -> Archetype;

    /// Place nodes and edges for a non-empty element list
    fn layout(&self, elements: &[String], connections: &[Connection]) -> DiagramModel;

    /// Fixed diagram produced when no elements are supplied
    fn default_diagram(&self) -> DiagramModel;

    /// Build and validate a model
    ///
    /// An empty element list yields [`default_diagram`](Self::default_diagram).
    /// A model that breaks the node/edge invariants is reported as
    /// [`DiagramError::Build`].
    fn build(&self, input: &DiagramInput) -> Result<DiagramModel, DiagramError> {
        let archetype = self.archetype();
        let build_span = span!(
            Level::INFO,
            "build_diagram",
            %archetype,
            elements = input.elements.len(),
            connections = input.connections.len()
        );
        let _enter = build_span.enter();

        let model = if input.is_empty() {
            debug!("No elements supplied, using default diagram");
            self.default_diagram()
        } else {
            self.layout(&input.elements, &input.connections)
        };

        model
            .validate()
            .map_err(|e| DiagramError::build_error(archetype.as_str(), e.to_string()))?;

        Ok(model)
    }

    /// Get the name of this builder
    fn name(&self) -> &'static str;
}
