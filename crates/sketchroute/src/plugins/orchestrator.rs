//! Plugin orchestrator for coordinating the diagram generation pipeline
//!
//! The orchestrator manages the flow of data through all plugins:
//! Classifier → Layout Builder (with simple fallback) → Scene

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, span, warn, Level};

use crate::classify::{ClassificationResult, Classifier, ClassifierConfig};
use crate::core::{
    Archetype, Database, Diagram, DiagramError, DiagramInput, DiagramModel, LayoutBuilder,
    SceneConfig,
};
use crate::plugins::builder_for;

/// Extension of every written scene
pub const SCENE_EXTENSION: &str = "excalidraw";

/// `<base>.excalidraw`, keeping any dots already in `base`
pub fn scene_path(base: impl AsRef<Path>) -> PathBuf {
    let mut path = OsString::from(base.as_ref().as_os_str());
    path.push(".");
    path.push(SCENE_EXTENSION);
    PathBuf::from(path)
}

/// A built model and the archetype that actually produced it
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub model: DiagramModel,
    pub archetype: Archetype,
    /// The requested builder failed and the simple builder took over
    pub fell_back: bool,
}

/// Summary of one generate call
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Archetype of the written scene; `simple` after a fallback
    #[serde(rename = "type")]
    pub archetype: Archetype,
    #[serde(rename = "excalidraw")]
    pub scene_path: PathBuf,
    #[serde(rename = "analysis")]
    pub classification: ClassificationResult,
    pub fell_back: bool,
}

/// Plugin orchestrator that coordinates the entire pipeline
///
/// The orchestrator wires the classifier, layout builders, and scene writer
/// together so callers can run a full pipeline without handling each trait
/// manually.
pub struct Orchestrator {
    classifier: Classifier,
    builders: HashMap<Archetype, Box<dyn LayoutBuilder>>,
    scene: SceneConfig,
}

impl Orchestrator {
    /// Create a new empty orchestrator
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default(), SceneConfig::default())
    }

    /// Create an empty orchestrator with explicit settings
    pub fn with_config(classifier: ClassifierConfig, scene: SceneConfig) -> Self {
        Self {
            classifier: Classifier::empty(classifier),
            builders: HashMap::new(),
            scene,
        }
    }

    /// Create a new orchestrator with every archetype plugin registered
    pub fn with_all_plugins() -> Self {
        let mut orchestrator = Self::new();
        orchestrator.register_all();
        orchestrator
    }

    /// Register every built-in plugin
    ///
    /// Detectors come from [`Classifier::register_builtin`], so the
    /// evaluation order is the classifier's.
    pub fn register_all(&mut self) {
        self.classifier.register_builtin();
        for archetype in Archetype::ALL {
            let builder = builder_for(archetype);
            debug!(%archetype, builder = builder.name(), "Registering builder");
            self.builders.insert(archetype, builder);
        }
    }

    /// Register a plugin's detector (if any) and builder
    ///
    /// A later registration for the same archetype replaces the builder.
    pub fn register<D: Diagram>(&mut self) {
        let archetype = D::archetype();
        debug!(plugin = D::name(), version = D::version(), "Registering plugin");
        if let Some(detector) = D::detector() {
            self.classifier.register(detector);
        }
        self.builders.insert(archetype, Box::new(D::create_builder()));
    }

    /// Archetypes with a registered builder, in declaration order
    pub fn archetypes(&self) -> Vec<Archetype> {
        Archetype::ALL
            .into_iter()
            .filter(|a| self.builders.contains_key(a))
            .collect()
    }

    pub fn has_builder(&self, archetype: Archetype) -> bool {
        self.builders.contains_key(&archetype)
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify text with the registered detectors
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classifier.classify(text)
    }

    /// Build with the archetype's registered builder
    pub fn build(
        &self,
        archetype: Archetype,
        input: &DiagramInput,
    ) -> Result<DiagramModel, DiagramError> {
        let builder = self.builders.get(&archetype).ok_or_else(|| {
            DiagramError::build_error(archetype.as_str(), "no builder registered")
        })?;
        builder.build(input)
    }

    /// Build, retrying with the simple builder when the requested one fails
    ///
    /// An error from the simple builder itself is returned as is.
    pub fn build_with_fallback(
        &self,
        archetype: Archetype,
        input: &DiagramInput,
    ) -> Result<BuildOutcome, DiagramError> {
        match self.build(archetype, input) {
            Ok(model) => Ok(BuildOutcome {
                model,
                archetype,
                fell_back: false,
            }),
            Err(error) if archetype != Archetype::Simple => {
                warn!(%archetype, %error, "Builder failed, falling back to simple diagram");
                let model = self.build(Archetype::Simple, input)?;
                Ok(BuildOutcome {
                    model,
                    archetype: Archetype::Simple,
                    fell_back: true,
                })
            }
            Err(error) => Err(error),
        }
    }

    /// Classify (unless `forced`), build and write `<output_base>.excalidraw`
    pub fn generate(
        &self,
        text: &str,
        input: &DiagramInput,
        forced: Option<Archetype>,
        output_base: impl AsRef<Path>,
    ) -> Result<GenerationResult> {
        let generate_span = span!(
            Level::INFO,
            "generate_diagram",
            input_len = text.len(),
            elements = input.elements.len()
        );
        let _enter = generate_span.enter();

        let classification = match forced {
            Some(archetype) => {
                debug!(%archetype, "Using forced archetype");
                ClassificationResult::forced(archetype)
            }
            None => self.classify(text),
        };

        let outcome = self
            .build_with_fallback(classification.archetype, input)
            .context("Failed to build diagram")?;
        debug!(
            node_count = outcome.model.node_count(),
            edge_count = outcome.model.edge_count(),
            "Model built"
        );

        let path = scene_path(output_base);
        outcome
            .model
            .save_with_config(&path, &self.scene)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;

        info!(
            archetype = %outcome.archetype,
            fell_back = outcome.fell_back,
            path = %path.display(),
            "Diagram generated"
        );

        Ok(GenerationResult {
            archetype: outcome.archetype,
            scene_path: path,
            classification,
            fell_back: outcome.fell_back,
        })
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Connection, Detector, EdgeData, NodeData, NodeRole, Point};
    use std::sync::Arc;

    /// Flowchart stand-in whose model always has a dangling edge
    struct BrokenDiagram;
    struct BrokenBuilder;

    impl LayoutBuilder for BrokenBuilder {
        fn archetype(&self) -> Archetype {
            Archetype::Flowchart
        }

        fn layout(&self, _elements: &[String], _connections: &[Connection]) -> DiagramModel {
            self.default_diagram()
        }

        fn default_diagram(&self) -> DiagramModel {
            let mut model = DiagramModel::new(Archetype::Flowchart);
            model.add_node(NodeData::new(
                "a",
                "A",
                Point::default(),
                Default::default(),
                NodeRole::Process,
            ));
            model.add_edge(EdgeData::new("a", "missing"));
            model
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    impl Diagram for BrokenDiagram {
        type Builder = BrokenBuilder;

        fn archetype() -> Archetype {
            Archetype::Flowchart
        }

        fn detector() -> Option<Arc<dyn Detector>> {
            None
        }

        fn create_builder() -> Self::Builder {
            BrokenBuilder
        }

        fn version() -> &'static str {
            "0.0.0"
        }
    }

    #[test]
    fn test_orchestrator_creation() {
        let orchestrator = Orchestrator::new();
        assert!(orchestrator.archetypes().is_empty());
        assert!(orchestrator.classifier().archetypes().is_empty());
    }

    #[test]
    fn test_orchestrator_with_all_plugins() {
        let orchestrator = Orchestrator::with_all_plugins();
        assert_eq!(orchestrator.archetypes(), Archetype::ALL.to_vec());
        assert_eq!(
            orchestrator.classifier().archetypes(),
            Archetype::DETECTABLE.to_vec()
        );
        assert_eq!(
            orchestrator.classifier().archetypes(),
            Classifier::new().archetypes()
        );
    }

    #[test]
    fn test_build_without_builder_fails() {
        let orchestrator = Orchestrator::new();
        let err = orchestrator
            .build(Archetype::Timeline, &DiagramInput::new())
            .unwrap_err();
        assert!(matches!(err, DiagramError::Build { .. }));
    }

    #[test]
    fn test_fallback_to_simple() {
        let mut orchestrator = Orchestrator::with_all_plugins();
        orchestrator.register::<BrokenDiagram>();

        let input = DiagramInput::from_elements(["one", "two"]);
        let outcome = orchestrator
            .build_with_fallback(Archetype::Flowchart, &input)
            .unwrap();
        assert!(outcome.fell_back);
        assert_eq!(outcome.archetype, Archetype::Simple);
        assert_eq!(outcome.model.archetype(), Archetype::Simple);
        assert_eq!(outcome.model.labels(), vec!["one", "two"]);
    }

    #[test]
    fn test_fallback_without_simple_builder_propagates() {
        let mut orchestrator = Orchestrator::new();
        orchestrator.register::<BrokenDiagram>();
        let result = orchestrator.build_with_fallback(Archetype::Flowchart, &DiagramInput::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_no_fallback_on_success() {
        let orchestrator = Orchestrator::with_all_plugins();
        let outcome = orchestrator
            .build_with_fallback(Archetype::MindMap, &DiagramInput::new())
            .unwrap();
        assert!(!outcome.fell_back);
        assert_eq!(outcome.archetype, Archetype::MindMap);
    }

    #[test]
    fn test_scene_path_appends_extension() {
        assert_eq!(scene_path("out/diagram"), PathBuf::from("out/diagram.excalidraw"));
        assert_eq!(scene_path("v1.2"), PathBuf::from("v1.2.excalidraw"));
    }

    #[test]
    fn test_generate_writes_scene() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = Orchestrator::with_all_plugins();
        let input = DiagramInput::from_elements(["2018: Founded", "2020: Product launch"]);

        let result = orchestrator
            .generate(
                "Founded 2018, launched 2020, released 2022",
                &input,
                None,
                dir.path().join("history"),
            )
            .unwrap();

        assert_eq!(result.archetype, Archetype::Timeline);
        assert!(!result.fell_back);
        assert!(result.scene_path.ends_with("history.excalidraw"));
        let written = std::fs::read_to_string(&result.scene_path).unwrap();
        let scene: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(scene["type"], "excalidraw");
    }

    #[test]
    fn test_generate_with_forced_type() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = Orchestrator::with_all_plugins();
        let result = orchestrator
            .generate(
                "",
                &DiagramInput::new(),
                Some(Archetype::EntityRelationship),
                dir.path().join("er"),
            )
            .unwrap();
        assert_eq!(result.archetype, Archetype::EntityRelationship);
        assert_eq!(result.classification.confidence, 1.0);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "er");
        assert_eq!(json["analysis"]["diagram_type"], "er");
    }

    #[test]
    fn test_generate_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let orchestrator = Orchestrator::with_all_plugins();
        let err = orchestrator
            .generate(
                "draw boxes",
                &DiagramInput::new(),
                None,
                dir.path().join("missing").join("out"),
            )
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DiagramError>(),
            Some(DiagramError::Io { .. })
        ));
    }
}
