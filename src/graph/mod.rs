//! Directed connection graph built from extracted connection records.

use std::collections::HashMap;

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::schema::Connection;

/// In-memory directed graph of a design's component connections.
///
/// Nodes are component names, edges are labeled with a connection type.
/// Node identity is the exact name string: no normalization or fuzzy
/// matching happens here, so differently-cased or re-phrased references
/// to the same physical component become distinct nodes. Duplicate edges
/// between the same pair of components collapse, last write wins.
#[derive(Debug, Default, Clone)]
pub struct DesignGraph {
    graph: DiGraph<String, String>,
    node_index: HashMap<String, NodeIndex>,
}

impl DesignGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
        }
    }

    /// Build a graph from a connection listing.
    ///
    /// Adds a node for every record's component name and a directed edge
    /// per connected_to entry, labeled with its connection type. Targets
    /// that never appear as their own record still become nodes; nothing
    /// validates that they do appear.
    pub fn from_connections(connections: &[Connection]) -> Self {
        let mut graph = Self::new();
        for connection in connections {
            graph.add_component(&connection.component_name);
            for target in &connection.connected_to {
                graph.add_connection(
                    &connection.component_name,
                    &target.component_name,
                    &target.connection_type,
                );
            }
        }
        graph
    }

    /// Add a component node, reusing the existing node for an exact name match
    pub fn add_component(&mut self, name: &str) -> NodeIndex {
        match self.node_index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.graph.add_node(name.to_string());
                self.node_index.insert(name.to_string(), index);
                index
            }
        }
    }

    /// Add a directed, labeled connection between two components.
    ///
    /// An existing source→target edge is overwritten with the new label.
    pub fn add_connection(&mut self, source: &str, target: &str, connection_type: &str) {
        let source_index = self.add_component(source);
        let target_index = self.add_component(target);
        self.graph
            .update_edge(source_index, target_index, connection_type.to_string());
    }

    /// Number of component nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of connection edges
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether a component with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    /// Iterate over component names
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Iterate over connections as (source, target, connection type)
    pub fn connections(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                edge.weight().as_str(),
            )
        })
    }

    /// Label of the source→target edge, if present
    pub fn edge_label(&self, source: &str, target: &str) -> Option<&str> {
        let source_index = *self.node_index.get(source)?;
        let target_index = *self.node_index.get(target)?;
        let edge = self.graph.find_edge(source_index, target_index)?;
        self.graph.edge_weight(edge).map(String::as_str)
    }

    /// Render the graph in Graphviz DOT format
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.graph))
    }
}
