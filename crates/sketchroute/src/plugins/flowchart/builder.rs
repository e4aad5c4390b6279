//! Flowchart layout builder
//!
//! Stacks a Start terminator, one node per element and an End terminator in
//! a single column. Elements that read like a check or a question become
//! decisions with a "yes" successor.

use tracing::trace;

use crate::core::{
    Archetype, Color, Connection, Database, DiagramModel, EdgeData, LayoutBuilder, NodeData,
    NodeRole, Point,
};

pub const START_ID: &str = "__start__";
pub const END_ID: &str = "__end__";

const COLUMN_X: f64 = 300.0;
const TOP_Y: f64 = 50.0;
const ROW_SPACING: f64 = 100.0;

/// Substrings that turn an element into a decision
const DECISION_WORDS: [&str; 6] = ["check", "if", "validate", "verify", "decision", "?"];

const BRANCH_LABEL: &str = "yes";
const DEFAULT_SUCCESSOR: &str = "Continue";

/// Whether an element should be drawn as a decision
pub fn is_decision(element: &str) -> bool {
    let lowered = element.trim().to_lowercase();
    DECISION_WORDS.iter().any(|word| lowered.contains(word))
}

/// Element text as displayed: trimmed, without trailing `.`, `!` or `?`
pub fn display_label(element: &str) -> &str {
    element.trim().trim_end_matches(&['.', '!', '?'][..])
}

/// First connection whose `from` appears inside the decision label
///
/// An empty `from` is a substring of every label and always matches.
fn branch_for<'a>(label: &str, connections: &'a [Connection]) -> Option<&'a Connection> {
    let lowered = label.to_lowercase();
    connections
        .iter()
        .find(|c| lowered.contains(&c.from.to_lowercase()))
}

/// Single-column stack that links every node to the one above it
struct Column {
    model: DiagramModel,
    previous: Option<String>,
}

impl Column {
    fn new() -> Self {
        Self {
            model: DiagramModel::new(Archetype::Flowchart),
            previous: None,
        }
    }

    fn push(&mut self, id: String, label: &str, role: NodeRole, color: Color, edge_label: Option<&str>) {
        let row = self.model.node_count() as f64;
        let position = Point::new(COLUMN_X, TOP_Y + row * ROW_SPACING);
        self.model
            .add_node(NodeData::new(id.clone(), label, position, color, role));

        if let Some(previous) = self.previous.take() {
            self.model
                .add_edge(EdgeData::new(previous, id.clone()).maybe_label(edge_label));
        }
        self.previous = Some(id);
    }

    fn finish(self) -> DiagramModel {
        self.model
    }
}

/// Flowchart layout builder
#[derive(Debug, Default, Clone, Copy)]
pub struct FlowchartBuilder;

impl FlowchartBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutBuilder for FlowchartBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::Flowchart
    }

    fn layout(&self, elements: &[String], connections: &[Connection]) -> DiagramModel {
        let mut column = Column::new();
        column.push(START_ID.to_string(), "Start", NodeRole::Terminator, Color::Green, None);

        for (i, element) in elements.iter().enumerate() {
            let label = display_label(element);

            if !is_decision(element) {
                column.push(format!("process_{i}"), label, NodeRole::Process, Color::Blue, None);
                continue;
            }

            trace!(index = i, label, "Element reads as a decision");
            column.push(format!("decision_{i}"), label, NodeRole::Decision, Color::Yellow, None);

            let (id, successor) = match branch_for(label, connections) {
                Some(conn) if !conn.to.is_empty() => (format!("process_{i}_yes"), conn.to.as_str()),
                Some(_) => (format!("process_{i}_yes"), DEFAULT_SUCCESSOR),
                None => (format!("process_{i}_continue"), DEFAULT_SUCCESSOR),
            };
            column.push(id, successor, NodeRole::Process, Color::Blue, Some(BRANCH_LABEL));
        }

        column.push(END_ID.to_string(), "End", NodeRole::Terminator, Color::Red, None);
        column.finish()
    }

    fn default_diagram(&self) -> DiagramModel {
        let mut column = Column::new();
        column.push(START_ID.to_string(), "Start", NodeRole::Terminator, Color::Green, None);
        column.push("main".to_string(), "Main Process", NodeRole::Process, Color::Blue, None);
        column.push(END_ID.to_string(), "End", NodeRole::Terminator, Color::Red, None);
        column.finish()
    }

    fn name(&self) -> &'static str {
        "flowchart-column"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiagramInput;

    fn build(elements: &[&str], connections: Vec<Connection>) -> DiagramModel {
        let input = DiagramInput::from_elements(elements.iter().copied()).with_connections(connections);
        FlowchartBuilder::new().build(&input).unwrap()
    }

    #[test]
    fn test_starts_and_ends_with_terminators() {
        let model = build(&["Submit form", "Save record"], vec![]);
        let nodes = model.node_slice();
        assert_eq!(nodes.first().unwrap().id, START_ID);
        assert_eq!(nodes.last().unwrap().id, END_ID);
        assert_eq!(model.labels(), vec!["Start", "Submit form", "Save record", "End"]);
        assert_eq!(model.edge_count(), 3);
    }

    #[test]
    fn test_vertical_spacing() {
        let model = build(&["One", "Two"], vec![]);
        let ys: Vec<f64> = model.nodes().map(|n| n.position.y).collect();
        assert_eq!(ys, vec![50.0, 150.0, 250.0, 350.0]);
        assert!(model.nodes().all(|n| n.position.x == COLUMN_X));
    }

    #[test]
    fn test_decision_with_matching_connection() {
        let model = build(
            &["Check credentials?"],
            vec![Connection::new("credentials", "Show dashboard")],
        );
        let decision = model.get_node("decision_0").unwrap();
        assert_eq!(decision.role, NodeRole::Decision);
        assert_eq!(decision.label, "Check credentials");

        let branch = model.get_node("process_0_yes").unwrap();
        assert_eq!(branch.label, "Show dashboard");

        let labeled: Vec<_> = model.edges().filter(|e| e.label.is_some()).collect();
        assert_eq!(labeled.len(), 1);
        assert_eq!(labeled[0].from, "decision_0");
        assert_eq!(labeled[0].label.as_deref(), Some(BRANCH_LABEL));
    }

    #[test]
    fn test_decision_without_connection_continues() {
        let model = build(&["Validate input", "Store"], vec![]);
        assert!(model.has_node("process_0_continue"));
        assert_eq!(model.get_node("process_0_continue").unwrap().label, "Continue");
        // the next element links from the synthesized successor
        assert!(model
            .edges()
            .any(|e| e.from == "process_0_continue" && e.to == "process_1"));
    }

    #[test]
    fn test_only_first_matching_connection_is_used() {
        let model = build(
            &["verify token"],
            vec![Connection::new("token", "Allow"), Connection::new("verify", "Deny")],
        );
        assert_eq!(model.get_node("process_0_yes").unwrap().label, "Allow");
        assert_eq!(model.node_count(), 4);
    }

    #[test]
    fn test_connection_without_from_matches_any_decision() {
        let model = build(&["Check token"], vec![Connection::new("", "Grant access")]);
        assert_eq!(model.labels(), vec!["Start", "Check token", "Grant access", "End"]);
        assert!(model.has_node("process_0_yes"));
    }

    #[test]
    fn test_question_mark_marks_decision() {
        assert!(is_decision("Ready?"));
        assert!(is_decision("IF approved"));
        assert!(!is_decision("Ship it."));
    }

    #[test]
    fn test_display_label_trims_punctuation() {
        assert_eq!(display_label("  Done!?. "), "Done");
        assert_eq!(display_label("v1.2 release"), "v1.2 release");
    }

    #[test]
    fn test_default_diagram() {
        let model = FlowchartBuilder::new().build(&DiagramInput::new()).unwrap();
        assert_eq!(model.labels(), vec!["Start", "Main Process", "End"]);
        assert!(model.has_node("main"));
        assert_eq!(model.edge_count(), 2);
    }
}
