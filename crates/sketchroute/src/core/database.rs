//! Core database trait for diagram data storage
//!
//! This trait defines the interface for storing and querying the nodes and
//! edges a builder produces.

/// Core trait for diagram databases
///
/// The associated types allow a store to define its own node and edge
/// structures. Insertion never fails: callers own id uniqueness, and
/// consistency is checked separately before serialization.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The edge data type for this database
    type Edge: Clone + Send + Sync;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node);

    /// Add an edge to the database
    fn add_edge(&mut self, edge: Self::Edge);

    /// Get a node by ID
    fn get_node(&self, id: &str) -> Option<&Self::Node>;

    /// Iterate over all nodes in insertion order
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Iterate over all edges in insertion order
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;
}
