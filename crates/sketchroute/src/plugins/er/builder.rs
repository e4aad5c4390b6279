//! Entity-relationship layout builder
//!
//! Entities on a three-column grid. Attributes are placeholders; the
//! upstream element list carries names only.

use crate::core::{
    cycle, title_case, Archetype, Color, Connection, Database, DiagramModel, EdgeData, EdgeKind,
    ElementIds, LayoutBuilder, NodeData, NodeRole, Point, SHORT_PALETTE,
};

const COLUMNS: usize = 3;
const ORIGIN_X: f64 = 100.0;
const ORIGIN_Y: f64 = 100.0;
const COLUMN_WIDTH: f64 = 250.0;
const ROW_HEIGHT: f64 = 200.0;

pub const PLACEHOLDER_ATTRIBUTES: [&str; 3] = ["id", "name", "created_at"];
pub const DEFAULT_CARDINALITY: &str = "1:N";
const DEFAULT_RELATIONSHIP: &str = "related to";

fn entity_position(index: usize) -> Point {
    let col = (index % COLUMNS) as f64;
    let row = (index / COLUMNS) as f64;
    Point::new(ORIGIN_X + col * COLUMN_WIDTH, ORIGIN_Y + row * ROW_HEIGHT)
}

fn entity(
    id: impl Into<String>,
    label: impl Into<String>,
    index: usize,
    attributes: &[&str],
    color: Color,
) -> NodeData {
    NodeData::new(
        id,
        label,
        entity_position(index),
        color,
        NodeRole::Entity {
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
        },
    )
}

fn relationship(from: impl Into<String>, to: impl Into<String>, label: &str) -> EdgeData {
    EdgeData::with_label(from, to, label).kind(EdgeKind::Relationship {
        cardinality: DEFAULT_CARDINALITY.to_string(),
    })
}

/// Entity-relationship layout builder
#[derive(Debug, Default, Clone, Copy)]
pub struct ErBuilder;

impl ErBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutBuilder for ErBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::EntityRelationship
    }

    fn layout(&self, elements: &[String], connections: &[Connection]) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::EntityRelationship);
        let mut ids = ElementIds::new();

        for (i, element) in elements.iter().enumerate() {
            let id = ids.assign(element);
            model.add_node(entity(
                id,
                title_case(element),
                i,
                &PLACEHOLDER_ATTRIBUTES,
                cycle(&SHORT_PALETTE, i),
            ));
        }

        for conn in connections {
            if let Some((from, to)) = ids.resolve_connection(conn) {
                let label = conn
                    .label
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .unwrap_or(DEFAULT_RELATIONSHIP);
                model.add_edge(relationship(from, to, label));
            }
        }

        model
    }

    fn default_diagram(&self) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::EntityRelationship);
        model.add_node(entity("user", "User", 0, &["id", "name", "email"], Color::Blue));
        model.add_node(entity("order", "Order", 1, &["id", "user_id", "total"], Color::Green));
        model.add_edge(relationship("user", "order", "has"));
        model
    }

    fn name(&self) -> &'static str {
        "er-grid"
    }
}
