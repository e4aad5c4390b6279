//! Archetype-agnostic diagram model
//!
//! Stores positioned nodes and directed edges in creation order. Builders
//! create a model, populate it, and hand it to the scene serializer.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::trace;

use super::{Archetype, Database, DiagramError, EdgeData, NodeData, SceneConfig};

/// Node/edge container produced by a layout builder
#[derive(Debug, Clone, Default)]
pub struct DiagramModel {
    archetype: Archetype,
    /// Nodes in insertion order
    nodes: Vec<NodeData>,
    /// Edges in insertion order
    edges: Vec<EdgeData>,
    /// First position of each node id
    index: HashMap<String, usize>,
}

impl DiagramModel {
    /// Create an empty model tagged with the archetype that built it
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            ..Default::default()
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes as a slice, in creation order
    pub fn node_slice(&self) -> &[NodeData] {
        &self.nodes
    }

    /// Edges as a slice, in creation order
    pub fn edge_slice(&self) -> &[EdgeData] {
        &self.edges
    }

    /// Labels of all nodes, in creation order
    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    /// Check the model invariants: unique node ids and no dangling edges.
    pub fn validate(&self) -> Result<(), DiagramError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(DiagramError::invalid_model(format!(
                    "duplicate node id '{}'",
                    node.id
                )));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !self.has_node(endpoint) {
                    return Err(DiagramError::invalid_model(format!(
                        "edge {} -> {} references missing node '{}'",
                        edge.from, edge.to, endpoint
                    )));
                }
            }
        }

        Ok(())
    }

    /// Serialize to the scene format and write it to `path` in a single write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DiagramError> {
        self.save_with_config(path, &SceneConfig::default())
    }

    /// Like [`save`](Self::save) with explicit scene settings
    pub fn save_with_config(
        &self,
        path: impl AsRef<Path>,
        config: &SceneConfig,
    ) -> Result<(), DiagramError> {
        super::scene::write_scene(self, path.as_ref(), config)
    }
}

impl Database for DiagramModel {
    type Node = NodeData;
    type Edge = EdgeData;

    fn add_node(&mut self, node: Self::Node) {
        trace!(id = %node.id, role = node.role.name(), "Adding node");
        self.index.entry(node.id.clone()).or_insert(self.nodes.len());
        self.nodes.push(node);
    }

    fn add_edge(&mut self, edge: Self::Edge) {
        trace!(from = %edge.from, to = %edge.to, "Adding edge");
        self.edges.push(edge);
    }

    fn get_node(&self, id: &str) -> Option<&Self::Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.edges.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.index.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, NodeRole, Point};

    fn node(id: &str) -> NodeData {
        NodeData::new(id, id, Point::new(0.0, 0.0), Color::Blue, NodeRole::Box)
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut model = DiagramModel::new(Archetype::Simple);
        model.add_node(node("c"));
        model.add_node(node("a"));
        model.add_node(node("b"));
        assert_eq!(model.labels(), vec!["c", "a", "b"]);
        assert_eq!(model.node_count(), 3);
    }

    #[test]
    fn test_get_node() {
        let mut model = DiagramModel::new(Archetype::Simple);
        model.add_node(node("a"));
        assert!(model.get_node("a").is_some());
        assert!(model.get_node("z").is_none());
    }

    #[test]
    fn test_validate_accepts_consistent_model() {
        let mut model = DiagramModel::new(Archetype::Simple);
        model.add_node(node("a"));
        model.add_node(node("b"));
        model.add_edge(EdgeData::new("a", "b"));
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut model = DiagramModel::new(Archetype::Simple);
        model.add_node(node("a"));
        model.add_node(node("a"));
        let err = model.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate node id 'a'"));
    }

    #[test]
    fn test_validate_rejects_dangling_edge() {
        let mut model = DiagramModel::new(Archetype::Simple);
        model.add_node(node("a"));
        model.add_edge(EdgeData::new("a", "ghost"));
        let err = model.validate().unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_clear() {
        let mut model = DiagramModel::new(Archetype::Simple);
        model.add_node(node("a"));
        model.add_edge(EdgeData::new("a", "a"));
        model.clear();
        assert_eq!(model.node_count(), 0);
        assert_eq!(model.edge_count(), 0);
        assert!(!model.has_node("a"));
    }
}
