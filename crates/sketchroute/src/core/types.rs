//! Core type definitions for diagram generation
//!
//! This module contains the fundamental types used throughout Sketchroute:
//! diagram archetypes, palette colors, node shapes and roles, and the node and
//! edge records stored in a [`DiagramModel`](super::DiagramModel).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DiagramError;

/// Diagram archetypes a description can be classified into
///
/// The declaration order of the first six variants is the classifier's
/// evaluation order, which also decides exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Flowchart,
    Architecture,
    Sequence,
    #[serde(rename = "mindmap")]
    MindMap,
    Timeline,
    #[serde(rename = "er")]
    EntityRelationship,
    /// Only reachable through fallback
    #[default]
    Simple,
}

impl Archetype {
    /// Archetypes with a signal detector, in evaluation order
    pub const DETECTABLE: [Archetype; 6] = [
        Archetype::Flowchart,
        Archetype::Architecture,
        Archetype::Sequence,
        Archetype::MindMap,
        Archetype::Timeline,
        Archetype::EntityRelationship,
    ];

    /// Every archetype, detectable ones first
    pub const ALL: [Archetype; 7] = [
        Archetype::Flowchart,
        Archetype::Architecture,
        Archetype::Sequence,
        Archetype::MindMap,
        Archetype::Timeline,
        Archetype::EntityRelationship,
        Archetype::Simple,
    ];

    /// Wire name used in JSON output and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Flowchart => "flowchart",
            Archetype::Architecture => "architecture",
            Archetype::Sequence => "sequence",
            Archetype::MindMap => "mindmap",
            Archetype::Timeline => "timeline",
            Archetype::EntityRelationship => "er",
            Archetype::Simple => "simple",
        }
    }

    /// Fixed human-readable reason reported when this archetype wins
    pub fn reasoning(&self) -> &'static str {
        match self {
            Archetype::Flowchart => "Detected steps, decisions, or process flow",
            Archetype::Architecture => "Detected system components, services, or layers",
            Archetype::Sequence => "Detected message passing between actors/services",
            Archetype::MindMap => "Detected central concept with branches or categories",
            Archetype::Timeline => "Detected chronological events or dates",
            Archetype::EntityRelationship => "Detected entities with attributes and relationships",
            Archetype::Simple => "No strong pattern detected, defaulting to simple diagram",
        }
    }

    /// Short description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Archetype::Flowchart => "Steps and decisions flowing from Start to End",
            Archetype::Architecture => "System components laid out on a grid",
            Archetype::Sequence => "Participants exchanging ordered messages",
            Archetype::MindMap => "A central concept with radiating branches",
            Archetype::Timeline => "Events and milestones along an axis",
            Archetype::EntityRelationship => "Entities with attributes and relationships",
            Archetype::Simple => "Plain boxes linked in order",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| DiagramError::UnknownArchetype {
                diagram_type: s.to_string(),
            })
    }
}

/// Palette colors understood by the scene renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Cyan,
    Yellow,
}

impl Color {
    /// Stroke color as a hex token
    pub fn stroke(&self) -> &'static str {
        match self {
            Color::Blue => "#1971c2",
            Color::Green => "#2f9e44",
            Color::Orange => "#e8590c",
            Color::Red => "#e03131",
            Color::Purple => "#9c36b5",
            Color::Cyan => "#0c8599",
            Color::Yellow => "#f08c00",
        }
    }

    /// Fill color as a hex token
    pub fn background(&self) -> &'static str {
        match self {
            Color::Blue => "#a5d8ff",
            Color::Green => "#b2f2bb",
            Color::Orange => "#ffd8a8",
            Color::Red => "#ffc9c9",
            Color::Purple => "#eebefa",
            Color::Cyan => "#99e9f2",
            Color::Yellow => "#ffec99",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Blue => write!(f, "blue"),
            Color::Green => write!(f, "green"),
            Color::Orange => write!(f, "orange"),
            Color::Red => write!(f, "red"),
            Color::Purple => write!(f, "purple"),
            Color::Cyan => write!(f, "cyan"),
            Color::Yellow => write!(f, "yellow"),
        }
    }
}

/// Visual shape of a node in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NodeShape {
    #[default]
    Rectangle,
    Diamond,
    Ellipse,
}

impl NodeShape {
    /// Scene element type for this shape
    pub fn scene_type(&self) -> &'static str {
        match self {
            NodeShape::Rectangle => "rectangle",
            NodeShape::Diamond => "diamond",
            NodeShape::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scene_type())
    }
}

/// A position in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Archetype-specific role of a node, with its role metadata
#[derive(Debug, Clone, PartialEq)]
pub enum NodeRole {
    /// Flowchart Start/End
    Terminator,
    /// Flowchart step
    Process,
    /// Flowchart branch point
    Decision,
    /// Architecture component
    Component,
    /// Sequence participant
    Participant,
    /// Mind map center
    Central,
    /// Mind map branch
    Branch,
    /// Timeline entry
    Event { date: String, description: String },
    /// Highlighted timeline entry
    Milestone { date: String },
    /// ER entity
    Entity { attributes: Vec<String> },
    /// Simple diagram box
    Box,
}

impl NodeRole {
    /// Default shape for nodes playing this role
    pub fn shape(&self) -> NodeShape {
        match self {
            NodeRole::Terminator | NodeRole::Central => NodeShape::Ellipse,
            NodeRole::Decision | NodeRole::Milestone { .. } => NodeShape::Diamond,
            _ => NodeShape::Rectangle,
        }
    }

    /// Short role name
    pub fn name(&self) -> &'static str {
        match self {
            NodeRole::Terminator => "terminator",
            NodeRole::Process => "process",
            NodeRole::Decision => "decision",
            NodeRole::Component => "component",
            NodeRole::Participant => "participant",
            NodeRole::Central => "central",
            NodeRole::Branch => "branch",
            NodeRole::Event { .. } => "event",
            NodeRole::Milestone { .. } => "milestone",
            NodeRole::Entity { .. } => "entity",
            NodeRole::Box => "box",
        }
    }
}

/// A node in the diagram with all its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Unique identifier for the node
    pub id: String,
    /// Display label
    pub label: String,
    /// Top-left corner in layout units
    pub position: Point,
    pub color: Color,
    pub shape: NodeShape,
    pub role: NodeRole,
}

impl NodeData {
    /// Create a new node whose shape follows its role
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Point,
        color: Color,
        role: NodeRole,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            color,
            shape: role.shape(),
            role,
        }
    }

    /// Override the shape
    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = shape;
        self
    }
}

/// What an edge represents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EdgeKind {
    /// Plain directed link
    #[default]
    Flow,
    /// Sequence message, numbered from 0 in send order
    Message { step: usize },
    /// ER relationship
    Relationship { cardinality: String },
    /// Link between consecutive timeline entries
    Axis,
}

/// A directed edge connecting two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeData {
    /// Source node ID
    pub from: String,
    /// Target node ID
    pub to: String,
    /// Optional label on the edge
    pub label: Option<String>,
    pub kind: EdgeKind,
}

impl EdgeData {
    /// Create a new unlabeled flow edge
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            kind: EdgeKind::Flow,
        }
    }

    /// Create a new labeled flow edge
    pub fn with_label(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(from, to)
        }
    }

    /// Set the edge kind
    pub fn kind(mut self, kind: EdgeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set an optional label, treating an empty string as no label
    pub fn maybe_label(mut self, label: Option<&str>) -> Self {
        self.label = label.filter(|l| !l.is_empty()).map(str::to_string);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_parsing() {
        assert_eq!("flowchart".parse::<Archetype>().unwrap(), Archetype::Flowchart);
        assert_eq!("ER".parse::<Archetype>().unwrap(), Archetype::EntityRelationship);
        assert_eq!(" mindmap ".parse::<Archetype>().unwrap(), Archetype::MindMap);
        assert_eq!("simple".parse::<Archetype>().unwrap(), Archetype::Simple);
        assert!("gantt".parse::<Archetype>().is_err());
    }

    #[test]
    fn test_archetype_display_round_trips_serde_name() {
        for archetype in Archetype::ALL {
            let json = serde_json::to_string(&archetype).unwrap();
            assert_eq!(json, format!("\"{}\"", archetype));
        }
    }

    #[test]
    fn test_detectable_excludes_simple() {
        assert!(!Archetype::DETECTABLE.contains(&Archetype::Simple));
        assert_eq!(Archetype::DETECTABLE[0], Archetype::Flowchart);
        assert_eq!(Archetype::DETECTABLE[5], Archetype::EntityRelationship);
    }

    #[test]
    fn test_color_tokens_are_hex() {
        for color in [Color::Blue, Color::Green, Color::Orange, Color::Red, Color::Purple, Color::Cyan, Color::Yellow] {
            assert!(color.stroke().starts_with('#'));
            assert_eq!(color.background().len(), 7);
        }
        assert_eq!(Color::Orange.to_string(), "orange");
    }

    #[test]
    fn test_role_shapes() {
        assert_eq!(NodeRole::Terminator.shape(), NodeShape::Ellipse);
        assert_eq!(NodeRole::Decision.shape(), NodeShape::Diamond);
        assert_eq!(
            NodeRole::Milestone { date: "2021".into() }.shape(),
            NodeShape::Diamond
        );
        assert_eq!(NodeRole::Component.shape(), NodeShape::Rectangle);
    }

    #[test]
    fn test_edge_constructors() {
        let edge = EdgeData::new("a", "b");
        assert!(edge.label.is_none());
        assert_eq!(edge.kind, EdgeKind::Flow);

        let labeled = EdgeData::with_label("a", "b", "yes");
        assert_eq!(labeled.label.as_deref(), Some("yes"));

        let empty = EdgeData::new("a", "b").maybe_label(Some(""));
        assert!(empty.label.is_none());
    }
}
