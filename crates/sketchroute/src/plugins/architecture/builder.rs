//! Architecture layout builder
//!
//! Components on a row-major grid of at most four columns.

use crate::core::{
    cycle, title_case, Archetype, Color, Connection, Database, DiagramModel, EdgeData,
    ElementIds, LayoutBuilder, NodeData, NodeRole, Point, FULL_PALETTE,
};

pub const MAX_COLUMNS: usize = 4;

const ORIGIN_X: f64 = 150.0;
const ORIGIN_Y: f64 = 100.0;
const COLUMN_WIDTH: f64 = 200.0;
const ROW_HEIGHT: f64 = 150.0;

/// Top-left corner of the `index`th component on a grid `columns` wide
pub fn grid_position(index: usize, columns: usize) -> Point {
    let columns = columns.max(1);
    let col = (index % columns) as f64;
    let row = (index / columns) as f64;
    Point::new(ORIGIN_X + col * COLUMN_WIDTH, ORIGIN_Y + row * ROW_HEIGHT)
}

/// Architecture layout builder
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchitectureBuilder;

impl ArchitectureBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutBuilder for ArchitectureBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::Architecture
    }

    fn layout(&self, elements: &[String], connections: &[Connection]) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::Architecture);
        let mut ids = ElementIds::new();
        let columns = elements.len().min(MAX_COLUMNS);

        for (i, element) in elements.iter().enumerate() {
            let id = ids.assign(element);
            model.add_node(NodeData::new(
                id,
                title_case(element),
                grid_position(i, columns),
                cycle(&FULL_PALETTE, i),
                NodeRole::Component,
            ));
        }

        for conn in connections {
            if let Some((from, to)) = ids.resolve_connection(conn) {
                model.add_edge(EdgeData::new(from, to).maybe_label(conn.label.as_deref()));
            }
        }

        model
    }

    fn default_diagram(&self) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::Architecture);
        for (id, label, x, color) in [
            ("frontend", "Frontend", 100.0, Color::Blue),
            ("backend", "Backend", 400.0, Color::Green),
            ("database", "Database", 700.0, Color::Orange),
        ] {
            model.add_node(NodeData::new(
                id,
                label,
                Point::new(x, 100.0),
                color,
                NodeRole::Component,
            ));
        }
        model.add_edge(EdgeData::with_label("frontend", "backend", "API"));
        model.add_edge(EdgeData::with_label("backend", "database", "SQL"));
        model
    }

    fn name(&self) -> &'static str {
        "architecture-grid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiagramInput;

    fn build(elements: &[&str], connections: Vec<Connection>) -> DiagramModel {
        let input = DiagramInput::from_elements(elements.iter().copied()).with_connections(connections);
        ArchitectureBuilder::new().build(&input).unwrap()
    }

    #[test]
    fn test_single_row_positions_and_colors() {
        let model = build(&["Frontend", "Backend", "Database"], vec![]);
        let xs: Vec<f64> = model.nodes().map(|n| n.position.x).collect();
        assert_eq!(xs, vec![150.0, 350.0, 550.0]);
        assert!(model.nodes().all(|n| n.position.y == 100.0));
        let colors: Vec<Color> = model.nodes().map(|n| n.color).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Green, Color::Orange]);
        assert_eq!(model.edge_count(), 0);
    }

    #[test]
    fn test_grid_wraps_after_four_columns() {
        let model = build(&["a", "b", "c", "d", "e", "f"], vec![]);
        let fifth = model.get_node("e").unwrap();
        assert_eq!(fifth.position, Point::new(150.0, 250.0));
        let sixth = model.get_node("f").unwrap();
        assert_eq!(sixth.position, Point::new(350.0, 250.0));
    }

    #[test]
    fn test_colors_cycle_through_full_palette() {
        let elements: Vec<String> = (0..8).map(|i| format!("svc {i}")).collect();
        let refs: Vec<&str> = elements.iter().map(String::as_str).collect();
        let model = build(&refs, vec![]);
        assert_eq!(model.get_node("svc_7").unwrap().color, Color::Blue);
        assert_eq!(model.get_node("svc_6").unwrap().color, Color::Yellow);
    }

    #[test]
    fn test_labels_are_title_cased() {
        let model = build(&["load balancer"], vec![]);
        let node = model.get_node("load_balancer").unwrap();
        assert_eq!(node.label, "Load Balancer");
        assert_eq!(node.role, NodeRole::Component);
    }

    #[test]
    fn test_unmatched_connections_are_dropped() {
        let model = build(
            &["Web", "Api"],
            vec![
                Connection::labeled("Web", "Api", "REST"),
                Connection::new("Web", "Cache"),
            ],
        );
        assert_eq!(model.edge_count(), 1);
        let edge = model.edges().next().unwrap();
        assert_eq!((edge.from.as_str(), edge.to.as_str()), ("web", "api"));
        assert_eq!(edge.label.as_deref(), Some("REST"));
    }

    #[test]
    fn test_duplicate_elements_get_unique_ids() {
        let model = build(&["Worker", "worker"], vec![Connection::new("WORKER", "worker")]);
        assert!(model.has_node("worker"));
        assert!(model.has_node("worker_2"));
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_default_diagram() {
        let model = ArchitectureBuilder::new().build(&DiagramInput::new()).unwrap();
        assert_eq!(model.labels(), vec!["Frontend", "Backend", "Database"]);
        let labels: Vec<_> = model.edges().filter_map(|e| e.label.as_deref()).collect();
        assert_eq!(labels, vec!["API", "SQL"]);
    }
}
