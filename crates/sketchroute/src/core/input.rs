//! Upstream element/connection contract
//!
//! Builders never look at the original text. Elements and connections are
//! extracted by an upstream collaborator and handed over in this shape:
//!
//! ```json
//! {
//!   "elements": ["Frontend", "Backend"],
//!   "connections": [{"from": "Frontend", "to": "Backend", "label": "API"}]
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{node_id, DiagramError, IdAllocator};

/// A relation between two element labels
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    pub fn labeled(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(from, to)
        }
    }
}

/// Ordered elements and connections for one diagram
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiagramInput {
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl DiagramInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an input from anything that yields element labels
    pub fn from_elements<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
            connections: Vec::new(),
        }
    }

    pub fn with_connections(mut self, connections: Vec<Connection>) -> Self {
        self.connections = connections;
        self
    }

    /// Parse the upstream JSON document
    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(json)
            .map_err(|e| DiagramError::invalid_input(format!("malformed element list: {}", e)))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Maps element labels to the node ids a builder assigned them
///
/// Lookups derive the id from the label (lowercase, spaces→underscores) and
/// compare against the ids derived from elements, so `"load balancer"` finds
/// the node built from `"Load Balancer"`. When two elements derive the same
/// id, lookups resolve to the first one.
#[derive(Debug, Default)]
pub struct ElementIds {
    allocator: IdAllocator,
    by_key: HashMap<String, String>,
}

impl ElementIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a fixed id so no element is assigned it
    pub fn reserve(&mut self, id: &str) {
        self.allocator.reserve(id);
    }

    /// Assign a unique node id to `element`
    pub fn assign(&mut self, element: &str) -> String {
        let key = node_id(element);
        let id = self.allocator.allocate(&key);
        self.by_key.entry(key).or_insert_with(|| id.clone());
        id
    }

    /// Node id for a label, if an element derived it
    pub fn resolve(&self, label: &str) -> Option<&str> {
        self.by_key.get(&node_id(label)).map(String::as_str)
    }

    /// Both endpoint ids of a connection, or `None` when either is unknown
    pub fn resolve_connection(&self, connection: &Connection) -> Option<(String, String)> {
        match (self.resolve(&connection.from), self.resolve(&connection.to)) {
            (Some(from), Some(to)) => Some((from.to_string(), to.to_string())),
            _ => {
                debug!(
                    from = %connection.from,
                    to = %connection.to,
                    "Dropping connection with unknown endpoint"
                );
                None
            }
        }
    }
}
