//! Scene serialization
//!
//! Converts a [`DiagramModel`] into an Excalidraw-style JSON scene: one shape
//! element per node followed by one arrow element per edge, both in creation
//! order. The external renderer owns everything past this document.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, span, Level};

use super::{
    label_width, wrap_label, Database, DiagramError, DiagramModel, EdgeData, EdgeKind,
    IdAllocator, NodeData, NodeRole, NodeShape,
};

const ARROW_STROKE: &str = "#1e1e1e";

/// Scene layout and metadata settings
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Value of the top-level `source` field
    pub source: String,
    /// Horizontal units per display column of label text
    pub char_width: f64,
    /// Vertical units per label line
    pub line_height: f64,
    /// Inner padding around label text
    pub padding: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Wrap labels wider than this many columns (0 = no wrap)
    pub max_label_width: usize,
    /// Vertical distance between consecutive sequence messages
    pub message_spacing: f64,
    pub font_size: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            source: "sketchroute".to_string(),
            char_width: 10.0,
            line_height: 25.0,
            padding: 20.0,
            min_width: 140.0,
            min_height: 60.0,
            max_label_width: 24,
            message_spacing: 50.0,
            font_size: 20,
        }
    }
}

/// Top-level scene document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub version: u32,
    pub source: String,
    pub elements: Vec<SceneElement>,
    pub app_state: AppState,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub view_background_color: &'static str,
}

/// A single scene element
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneElement {
    Rectangle(ShapeElement),
    Diamond(ShapeElement),
    Ellipse(ShapeElement),
    Arrow(ArrowElement),
}

impl SceneElement {
    pub fn id(&self) -> &str {
        match self {
            SceneElement::Rectangle(s) | SceneElement::Diamond(s) | SceneElement::Ellipse(s) => {
                &s.id
            }
            SceneElement::Arrow(a) => &a.id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_color: &'static str,
    pub background_color: &'static str,
    pub fill_style: &'static str,
    pub stroke_width: u32,
    pub text: String,
    pub font_size: u32,
    pub text_align: &'static str,
    pub vertical_align: &'static str,
    pub custom_data: ShapeData,
}

/// Model metadata carried along for consumers of the scene
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeData {
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_color: &'static str,
    pub stroke_width: u32,
    /// Points relative to (x, y)
    pub points: Vec<[f64; 2]>,
    pub start_binding: Binding,
    pub end_binding: Binding,
    pub end_arrowhead: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub element_id: String,
}

/// Computed bounds of a node shape
#[derive(Debug, Clone, Copy)]
struct Bounds {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the side facing `(tx, ty)`
    fn port_towards(&self, tx: f64, ty: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        let (dx, dy) = (tx - cx, ty - cy);
        if dx.abs() >= dy.abs() {
            let x = if dx >= 0.0 { self.x + self.width } else { self.x };
            (x, cy)
        } else {
            let y = if dy >= 0.0 { self.y + self.height } else { self.y };
            (cx, y)
        }
    }
}

impl DiagramModel {
    /// Build the scene document for this model
    pub fn to_scene(&self, config: &SceneConfig) -> Scene {
        let scene_span = span!(
            Level::DEBUG,
            "to_scene",
            nodes = self.node_count(),
            edges = self.edge_count()
        );
        let _enter = scene_span.enter();

        let mut bounds: HashMap<&str, Bounds> = HashMap::new();
        // Arrow ids share the element namespace with node ids
        let mut ids = IdAllocator::new();
        let mut elements = Vec::with_capacity(self.node_count() + self.edge_count());

        for node in self.nodes() {
            let (text, b) = shape_text_and_bounds(node, config);
            bounds.entry(node.id.as_str()).or_insert(b);
            ids.reserve(&node.id);
            elements.push(shape_element(node, text, b, config));
        }

        for (i, edge) in self.edges().enumerate() {
            match (bounds.get(edge.from.as_str()), bounds.get(edge.to.as_str())) {
                (Some(from), Some(to)) => {
                    let id = ids.allocate(&format!("edge_{}", i));
                    elements.push(SceneElement::Arrow(arrow_element(id, edge, from, to, config)));
                }
                _ => debug!(from = %edge.from, to = %edge.to, "Skipping edge with unknown endpoint"),
            }
        }

        Scene {
            kind: "excalidraw",
            version: 2,
            source: config.source.clone(),
            elements,
            app_state: AppState {
                view_background_color: "#ffffff",
            },
        }
    }

    /// Pretty-printed scene JSON
    pub fn to_json(&self, config: &SceneConfig) -> Result<String, DiagramError> {
        Ok(serde_json::to_string_pretty(&self.to_scene(config))?)
    }
}

/// Serialize `model` and write it to `path`
pub(crate) fn write_scene(
    model: &DiagramModel,
    path: &Path,
    config: &SceneConfig,
) -> Result<(), DiagramError> {
    model.validate()?;
    let json = model.to_json(config)?;
    fs::write(path, json).map_err(|e| DiagramError::io_error(path, e))?;
    info!(path = %path.display(), archetype = %model.archetype(), "Scene written");
    Ok(())
}

fn shape_text_and_bounds(node: &NodeData, config: &SceneConfig) -> (String, Bounds) {
    let mut lines = wrap_label(&node.label, config.max_label_width);
    match &node.role {
        NodeRole::Event { date, description } => {
            lines.insert(0, date.clone());
            if !description.is_empty() {
                lines.push(description.clone());
            }
        }
        NodeRole::Milestone { date } => lines.insert(0, date.clone()),
        NodeRole::Entity { attributes } => {
            lines.push("─".repeat(8));
            lines.extend(attributes.iter().cloned());
        }
        _ => {}
    }
    let text = lines.join("\n");

    #[allow(clippy::cast_precision_loss)]
    let text_width = label_width(&text) as f64 * config.char_width;
    #[allow(clippy::cast_precision_loss)]
    let text_height = lines.len() as f64 * config.line_height;

    let mut width = (text_width + 2.0 * config.padding).max(config.min_width);
    let mut height = (text_height + 2.0 * config.padding).max(config.min_height);
    // Diamonds and ellipses lose usable area at the corners.
    if node.shape != NodeShape::Rectangle {
        width *= 1.3;
        height *= 1.3;
    }

    let bounds = Bounds {
        x: node.position.x,
        y: node.position.y,
        width,
        height,
    };
    (text, bounds)
}

fn shape_element(node: &NodeData, text: String, b: Bounds, config: &SceneConfig) -> SceneElement {
    let (date, attributes) = match &node.role {
        NodeRole::Event { date, .. } | NodeRole::Milestone { date } => (Some(date.clone()), Vec::new()),
        NodeRole::Entity { attributes } => (None, attributes.clone()),
        _ => (None, Vec::new()),
    };

    let shape = ShapeElement {
        id: node.id.clone(),
        x: b.x,
        y: b.y,
        width: b.width,
        height: b.height,
        stroke_color: node.color.stroke(),
        background_color: node.color.background(),
        fill_style: "solid",
        stroke_width: 2,
        text,
        font_size: config.font_size,
        text_align: "center",
        vertical_align: "middle",
        custom_data: ShapeData {
            role: node.role.name(),
            date,
            attributes,
        },
    };

    match node.shape {
        NodeShape::Rectangle => SceneElement::Rectangle(shape),
        NodeShape::Diamond => SceneElement::Diamond(shape),
        NodeShape::Ellipse => SceneElement::Ellipse(shape),
    }
}

fn arrow_element(
    id: String,
    edge: &EdgeData,
    from: &Bounds,
    to: &Bounds,
    config: &SceneConfig,
) -> ArrowElement {
    let (start, end) = match edge.kind {
        EdgeKind::Message { step } => {
            // Messages run horizontally below the participant row, one row per step.
            #[allow(clippy::cast_precision_loss)]
            let y = from.y.max(to.y) + from.height.max(to.height) + config.message_spacing * (step as f64 + 1.0);
            ((from.center().0, y), (to.center().0, y))
        }
        _ => {
            let (tx, ty) = to.center();
            let (fx, fy) = from.center();
            (from.port_towards(tx, ty), to.port_towards(fx, fy))
        }
    };

    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let label = match &edge.kind {
        EdgeKind::Relationship { cardinality } => Some(match &edge.label {
            Some(label) => format!("{} ({})", label, cardinality),
            None => cardinality.clone(),
        }),
        _ => edge.label.clone(),
    };

    ArrowElement {
        id,
        x: start.0,
        y: start.1,
        width: dx.abs(),
        height: dy.abs(),
        stroke_color: ARROW_STROKE,
        stroke_width: 2,
        points: vec![[0.0, 0.0], [dx, dy]],
        start_binding: Binding {
            element_id: edge.from.clone(),
        },
        end_binding: Binding {
            element_id: edge.to.clone(),
        },
        end_arrowhead: "arrow",
        label,
    }
}
