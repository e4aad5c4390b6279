//! Sketchroute - Route short text descriptions to diagram layouts
//!
//! A library that scores a free-text description against six diagram
//! archetypes, picks the best one, and lays out externally supplied elements
//! and connections as a positioned Excalidraw scene.
//!
//! # Quick Start
//!
//! ```rust
//! use sketchroute::classify;
//! use sketchroute::core::Archetype;
//!
//! let result = classify("If credentials valid then show dashboard else show error");
//! assert_eq!(result.archetype, Archetype::Flowchart);
//! assert_eq!(result.confidence, 0.7);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use sketchroute::prelude::*;
//!
//! let orchestrator = Orchestrator::with_all_plugins();
//! let analysis = orchestrator.classify("Frontend calls backend API, backend queries database");
//! assert_eq!(analysis.archetype, Archetype::Architecture);
//!
//! // Elements and connections come from an upstream extractor
//! let input = DiagramInput::from_elements(["Frontend", "Backend", "Database"])
//!     .with_connections(vec![Connection::labeled("Frontend", "Backend", "API")]);
//!
//! let outcome = orchestrator.build_with_fallback(analysis.archetype, &input).unwrap();
//! assert_eq!(outcome.model.node_count(), 3);
//! assert_eq!(outcome.model.edge_count(), 1);
//!
//! // Serialize for the external renderer
//! let json = outcome.model.to_json(&SceneConfig::default()).unwrap();
//! assert!(json.contains("\"excalidraw\""));
//! ```

pub mod classify;
pub mod core;
pub mod plugins;

pub use crate::classify::{ClassificationResult, Classifier, ClassifierConfig};
pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classify::{ClassificationResult, Classifier, ClassifierConfig};
    pub use crate::core::{
        Archetype, Connection, Database, Detector, Diagram, DiagramError, DiagramInput,
        DiagramModel, EdgeData, EdgeKind, LayoutBuilder, NodeData, NodeRole, SceneConfig,
    };
    pub use crate::plugins::orchestrator::{GenerationResult, Orchestrator};
}

/// Classify a text description with the built-in detectors
///
/// # Example
/// ```rust
/// use sketchroute::{classify, Archetype};
///
/// let result = classify("a user has many orders and an order belongs to a user");
/// assert_eq!(result.archetype, Archetype::EntityRelationship);
/// ```
pub fn classify(text: &str) -> ClassificationResult {
    Classifier::new().classify(text)
}

/// Lay out elements and connections with one archetype's builder
///
/// No fallback is attempted; use
/// [`Orchestrator::build_with_fallback`](plugins::Orchestrator::build_with_fallback)
/// for that.
///
/// # Example
/// ```rust
/// use sketchroute::{build, Archetype, Database, DiagramInput};
///
/// let model = build(Archetype::Sequence, &DiagramInput::new()).unwrap();
/// assert_eq!(model.node_count(), 2);
/// assert_eq!(model.edge_count(), 2);
/// ```
pub fn build(archetype: Archetype, input: &DiagramInput) -> Result<DiagramModel, DiagramError> {
    plugins::builder_for(archetype).build(input)
}
