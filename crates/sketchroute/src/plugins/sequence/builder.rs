//! Sequence layout builder
//!
//! Participants stand in one row; every message is an edge numbered in send
//! order so the scene can stack message arrows below the row.

use crate::core::{
    cycle, title_case, Archetype, Color, Connection, Database, DiagramModel, EdgeData, EdgeKind,
    ElementIds, LayoutBuilder, NodeData, NodeRole, Point, SHORT_PALETTE,
};

const ORIGIN_X: f64 = 100.0;
const PARTICIPANT_SPACING: f64 = 200.0;
const ROW_Y: f64 = 100.0;

const DEFAULT_MESSAGE: &str = "Message";

fn participant_position(index: usize) -> Point {
    Point::new(ORIGIN_X + index as f64 * PARTICIPANT_SPACING, ROW_Y)
}

/// Appends messages with consecutive step numbers
struct Messages {
    step: usize,
}

impl Messages {
    fn new() -> Self {
        Self { step: 0 }
    }

    fn send(&mut self, model: &mut DiagramModel, from: String, to: String, label: &str) {
        model.add_edge(
            EdgeData::with_label(from, to, label).kind(EdgeKind::Message { step: self.step }),
        );
        self.step += 1;
    }
}

/// Sequence layout builder
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceBuilder;

impl SequenceBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutBuilder for SequenceBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::Sequence
    }

    fn layout(&self, elements: &[String], connections: &[Connection]) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::Sequence);
        let mut ids = ElementIds::new();
        let mut order = Vec::with_capacity(elements.len());

        for (i, element) in elements.iter().enumerate() {
            let id = ids.assign(element);
            model.add_node(NodeData::new(
                id.clone(),
                title_case(element),
                participant_position(i),
                cycle(&SHORT_PALETTE, i),
                NodeRole::Participant,
            ));
            order.push(id);
        }

        let mut messages = Messages::new();
        if connections.is_empty() {
            for (i, pair) in order.windows(2).enumerate() {
                let label = format!("Step {}", i + 1);
                messages.send(&mut model, pair[0].clone(), pair[1].clone(), &label);
            }
            return model;
        }

        for conn in connections {
            if let Some((from, to)) = ids.resolve_connection(conn) {
                let label = conn
                    .label
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .unwrap_or(DEFAULT_MESSAGE);
                messages.send(&mut model, from, to, label);
            }
        }

        model
    }

    fn default_diagram(&self) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::Sequence);
        for (i, (id, label, color)) in [("user", "User", Color::Blue), ("server", "Server", Color::Green)]
            .into_iter()
            .enumerate()
        {
            model.add_node(NodeData::new(
                id,
                label,
                participant_position(i),
                color,
                NodeRole::Participant,
            ));
        }

        let mut messages = Messages::new();
        messages.send(&mut model, "user".into(), "server".into(), "Request");
        messages.send(&mut model, "server".into(), "user".into(), "Response");
        model
    }

    fn name(&self) -> &'static str {
        "sequence-lanes"
    }
}
