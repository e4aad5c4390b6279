//! Timeline layout builder
//!
//! Entries are collected first and placed along a horizontal axis by a final
//! commit step. Input order is kept as given: dates are never re-sorted.

use crate::core::{
    cycle, Archetype, Color, Connection, Database, DiagramModel, EdgeData, EdgeKind,
    LayoutBuilder, NodeData, NodeRole, Point, SHORT_PALETTE,
};

const ORIGIN_X: f64 = 100.0;
const ENTRY_SPACING: f64 = 200.0;
const AXIS_Y: f64 = 200.0;

/// Words in an event text that promote it to a milestone
const MILESTONE_WORDS: [&str; 4] = ["milestone", "launch", "release", "completion"];

const MILESTONE_COLOR: Color = Color::Red;

/// One timeline entry before placement
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub label: String,
    pub role: NodeRole,
    pub color: Color,
}

impl TimelineEntry {
    pub fn event(date: &str, label: &str, description: &str, color: Color) -> Self {
        Self {
            label: label.to_string(),
            role: NodeRole::Event {
                date: date.to_string(),
                description: description.to_string(),
            },
            color,
        }
    }

    pub fn milestone(date: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            role: NodeRole::Milestone {
                date: date.to_string(),
            },
            color: MILESTONE_COLOR,
        }
    }

    /// Interpret one element: `"<date>: <event>"`, or a bare event that gets
    /// a positional `Step n` date
    pub fn parse(index: usize, element: &str) -> Self {
        let color = cycle(&SHORT_PALETTE, index);
        match element.split_once(':') {
            Some((date, event)) => {
                let (date, event) = (date.trim(), event.trim());
                let lowered = event.to_lowercase();
                if MILESTONE_WORDS.iter().any(|w| lowered.contains(w)) {
                    Self::milestone(date, event)
                } else {
                    Self::event(date, event, "", color)
                }
            }
            None => Self::event(&format!("Step {}", index + 1), element, "", color),
        }
    }
}

/// Collects entries, then lays them out in one pass
#[derive(Debug, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TimelineEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Place every entry on the axis in push order and link neighbours
    pub fn commit(self) -> DiagramModel {
        let mut model = DiagramModel::new(Archetype::Timeline);
        let mut previous: Option<String> = None;

        for (i, entry) in self.entries.into_iter().enumerate() {
            let id = format!("event_{i}");
            let position = Point::new(ORIGIN_X + i as f64 * ENTRY_SPACING, AXIS_Y);
            model.add_node(NodeData::new(
                id.clone(),
                entry.label,
                position,
                entry.color,
                entry.role,
            ));

            if let Some(prev) = previous.replace(id.clone()) {
                model.add_edge(EdgeData::new(prev, id).kind(EdgeKind::Axis));
            }
        }

        model
    }
}

/// Timeline layout builder
#[derive(Debug, Default, Clone, Copy)]
pub struct TimelineBuilder;

impl TimelineBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutBuilder for TimelineBuilder {
    fn archetype(&self) -> Archetype {
        Archetype::Timeline
    }

    fn layout(&self, elements: &[String], _connections: &[Connection]) -> DiagramModel {
        let mut timeline = Timeline::new();
        for (i, element) in elements.iter().enumerate() {
            timeline.push(TimelineEntry::parse(i, element));
        }
        timeline.commit()
    }

    fn default_diagram(&self) -> DiagramModel {
        let mut timeline = Timeline::new();
        timeline
            .push(TimelineEntry::event("2020", "Start", "Beginning", Color::Blue))
            .push(TimelineEntry::milestone("2021", "Milestone"))
            .push(TimelineEntry::event("2022", "Progress", "Continue", Color::Green))
            .push(TimelineEntry::event("2023", "Current", "Today", Color::Orange));
        timeline.commit()
    }

    fn name(&self) -> &'static str {
        "timeline-axis"
    }
}
