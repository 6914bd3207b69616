//! Free-text relationship queries over extracted connection records.
//!
//! Queries re-scan the raw [`Connection`] records rather than the built
//! graph, and reduce them to the subgraph touching matching components.

use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::graph::DesignGraph;
use crate::schema::{Connection, ConnectionTarget};

/// Outcome of a relationship query.
///
/// `NoMatch` is a reported condition, not an error: the scan completed
/// and simply found no component matching the query.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    Found(RelationshipReport),
    NoMatch,
}

/// The subgraph and text summary for a matched query
#[derive(Debug, Clone)]
pub struct RelationshipReport {
    /// Directed subgraph containing only matched nodes and edges.
    pub subgraph: DesignGraph,
    /// Human-readable listing of the matched relationships.
    pub summary: String,
}

/// Find the relationships touching components that match a query.
///
/// Matching is case-insensitive substring matching against component
/// names. A match on a record's own component name includes that node and
/// all of its outgoing connections; otherwise a match on a connected
/// target includes just that edge. Empty or whitespace-only queries are
/// rejected before any scan.
pub fn find_relationships(
    query: &str,
    connections: &[Connection],
) -> QueryResult<QueryOutcome> {
    if query.trim().is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    let needle = query.to_lowercase();
    let mut subgraph = DesignGraph::new();
    let mut summary = String::new();
    let mut found = false;

    for connection in connections {
        let source = &connection.component_name;
        if source.to_lowercase().contains(&needle) {
            subgraph.add_component(source);
            summary.push_str(&format!(
                "Component {} - {}\n",
                connection.component_number, source
            ));
            for target in &connection.connected_to {
                subgraph.add_connection(source, &target.component_name, &target.connection_type);
                summary.push_str(&target_line(target));
            }
            found = true;
        } else {
            for target in &connection.connected_to {
                if target.component_name.to_lowercase().contains(&needle) {
                    subgraph.add_connection(
                        source,
                        &target.component_name,
                        &target.connection_type,
                    );
                    summary.push_str(&target_line(target));
                    found = true;
                }
            }
        }
    }

    debug!(
        query = %query,
        nodes = subgraph.node_count(),
        edges = subgraph.edge_count(),
        found,
        "Relationship query scanned"
    );

    if found {
        Ok(QueryOutcome::Found(RelationshipReport { subgraph, summary }))
    } else {
        Ok(QueryOutcome::NoMatch)
    }
}

fn target_line(target: &ConnectionTarget) -> String {
    format!(
        " - Connected to: {} - {}, Connection Type: {}, Style: {}\n",
        target.component_number,
        target.component_name,
        target.connection_type,
        target.connection_style
    )
}
