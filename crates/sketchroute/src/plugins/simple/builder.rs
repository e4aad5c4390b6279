//! Simple layout builder
//!
//! Plain boxes: one row for up to four elements, otherwise a three-column
//! grid. This builder has no failing precondition, which makes it the
//! recovery path when another builder fails.

use crate::core::{
    cycle, Archetype, Color, Connection, Database, DiagramModel, EdgeData, ElementIds,
    LayoutBuilder, NodeData, NodeRole, Point, FULL_PALETTE,
};

/// Largest element count laid out as a single row
pub const MAX_ROW: usize = 4;

const GRID_COLUMNS: usize = 3;
const ORIGIN_X: f64 = 100.0;
const COLUMN_WIDTH: f64 = 200.0;
const ROW_Y: f64 = 150.0;
const GRID_TOP: f64 = 100.0;
const GRID_ROW_HEIGHT: f64 = 120.0;

/// Top-left corner of box `index` out of `count`
pub fn box_position(index: usize, count: usize) -> Point {
    if count <= MAX_ROW {
        return Point::new(ORIGIN_X + index as f64 * COLUMN_WIDTH, ROW_Y);
    }
    let col = (index % GRID_COLUMNS) as f64;
    let row = (index / GRID_COLUMNS) as f64;
    Point::new(ORIGIN_X + col * COLUMN_WIDTH, GRID_TOP + row * GRID_ROW_HEIGHT)
}

/// Simple layout builder
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleBuilder;

impl SimpleBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutBuilder for SimpleBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::Simple
    }

    fn layout(&self, elements: &[String], connections: &[Connection]) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::Simple);
        let mut ids = ElementIds::new();
        let mut order = Vec::with_capacity(elements.len());

        for (i, element) in elements.iter().enumerate() {
            let id = ids.assign(element);
            model.add_node(NodeData::new(
                id.clone(),
                element.as_str(),
                box_position(i, elements.len()),
                cycle(&FULL_PALETTE, i),
                NodeRole::Box,
            ));
            order.push(id);
        }

        if connections.is_empty() {
            for pair in order.windows(2) {
                model.add_edge(EdgeData::new(pair[0].clone(), pair[1].clone()));
            }
            return model;
        }

        for conn in connections {
            if let Some((from, to)) = ids.resolve_connection(conn) {
                model.add_edge(EdgeData::new(from, to).maybe_label(conn.label.as_deref()));
            }
        }

        model
    }

    fn default_diagram(&self) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::Simple);
        for (id, label, x, color) in [
            ("item_1", "Item 1", 100.0, Color::Blue),
            ("item_2", "Item 2", 300.0, Color::Green),
        ] {
            model.add_node(NodeData::new(id, label, Point::new(x, 100.0), color, NodeRole::Box));
        }
        model.add_edge(EdgeData::with_label("item_1", "item_2", "connection"));
        model
    }

    fn name(&self) -> &'static str {
        "simple-boxes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiagramInput;

    fn build(elements: &[&str], connections: Vec<Connection>) -> DiagramModel {
        let input = DiagramInput::from_elements(elements.iter().copied()).with_connections(connections);
        SimpleBuilder::new().build(&input).unwrap()
    }

    #[test]
    fn test_row_layout_up_to_four() {
        let model = build(&["a", "b", "c", "d"], vec![]);
        let positions: Vec<Point> = model.nodes().map(|n| n.position).collect();
        assert_eq!(positions[3], Point::new(700.0, 150.0));
        assert!(positions.iter().all(|p| p.y == 150.0));
    }

    #[test]
    fn test_grid_layout_above_four() {
        let model = build(&["a", "b", "c", "d", "e"], vec![]);
        assert_eq!(model.get_node("a").unwrap().position, Point::new(100.0, 100.0));
        assert_eq!(model.get_node("d").unwrap().position, Point::new(100.0, 220.0));
        assert_eq!(model.get_node("e").unwrap().position, Point::new(300.0, 220.0));
    }

    #[test]
    fn test_labels_kept_verbatim() {
        let model = build(&["mixed CASE label"], vec![]);
        assert_eq!(model.labels(), vec!["mixed CASE label"]);
    }

    #[test]
    fn test_sequential_links_without_connections() {
        let model = build(&["one", "two", "three"], vec![]);
        assert_eq!(model.edge_count(), 2);
        assert!(model.edges().all(|e| e.label.is_none()));
    }

    #[test]
    fn test_connections_replace_sequential_links() {
        let model = build(
            &["one", "two", "three"],
            vec![Connection::labeled("three", "one", "loop"), Connection::new("one", "ten")],
        );
        assert_eq!(model.edge_count(), 1);
        let edge = model.edges().next().unwrap();
        assert_eq!((edge.from.as_str(), edge.to.as_str()), ("three", "one"));
    }

    #[test]
    fn test_default_diagram() {
        let model = SimpleBuilder::new().build(&DiagramInput::new()).unwrap();
        assert_eq!(model.labels(), vec!["Item 1", "Item 2"]);
        assert_eq!(model.edges().next().unwrap().label.as_deref(), Some("connection"));
    }
}
