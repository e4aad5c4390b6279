//! Mind map layout builder
//!
//! The first element is the central concept; every other element becomes a
//! branch evenly spaced on a circle around it, starting at 12 o'clock.
//! Connections are not used: every branch links from the center.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::{
    cycle, Archetype, Color, Connection, Database, DiagramModel, EdgeData, LayoutBuilder,
    NodeData, NodeRole, Point, BRANCH_PALETTE,
};

pub const CENTRAL_ID: &str = "__central__";

const CENTER: Point = Point { x: 400.0, y: 300.0 };
const RADIUS: f64 = 250.0;

/// Position of branch `index` out of `count`, rounded to hundredths
pub fn branch_position(index: usize, count: usize) -> Point {
    let angle = -FRAC_PI_2 + TAU * index as f64 / count.max(1) as f64;
    let round = |v: f64| (v * 100.0).round() / 100.0;
    Point::new(
        round(CENTER.x + RADIUS * angle.cos()),
        round(CENTER.y + RADIUS * angle.sin()),
    )
}

fn populate(central: &str, branches: &[&str]) -> DiagramModel {
    let mut model = DiagramModel::new(Archetype::MindMap);
    model.add_node(NodeData::new(CENTRAL_ID, central, CENTER, Color::Blue, NodeRole::Central));

    for (i, label) in branches.iter().enumerate() {
        let id = format!("branch_{i}");
        model.add_node(NodeData::new(
            id.clone(),
            *label,
            branch_position(i, branches.len()),
            cycle(&BRANCH_PALETTE, i),
            NodeRole::Branch,
        ));
        model.add_edge(EdgeData::new(CENTRAL_ID, id));
    }

    model
}

/// Mind map layout builder
#[derive(Debug, Default, Clone, Copy)]
pub struct MindMapBuilder;

impl MindMapBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutBuilder for MindMapBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::MindMap
    }

    fn layout(&self, elements: &[String], _connections: &[Connection]) -> DiagramModel {
        let Some((central, rest)) = elements.split_first() else {
            return self.default_diagram();
        };
        let branches: Vec<&str> = rest.iter().map(String::as_str).collect();
        populate(central, &branches)
    }

    fn default_diagram(&self) -> DiagramModel {
        populate("Central Concept", &["Branch 1", "Branch 2"])
    }

    fn name(&self) -> &'static str {
        "mindmap-radial"
    }
}
