//! Two-stage analysis pipeline and the session object holding its result.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{Config, DesignConfig};
use crate::encoding::image_to_data_url;
use crate::error::AppResult;
use crate::graph::DesignGraph;
use crate::model::ModelClient;
use crate::prompts::{
    connection_graph_system_prompt, CONNECTION_GRAPH_USER_PROMPT, CONNECTION_TYPES_SYSTEM_PROMPT,
    CONNECTION_TYPES_USER_PROMPT,
};
use crate::query::{find_relationships, QueryOutcome};
use crate::schema::{Connection, ConnectionLegend, ConnectionType, DesignConnections};

/// Result of one successful analysis run.
///
/// Created on success, replaced wholesale by the next run, dropped at the
/// end of the interactive session. Queries read the raw connection
/// records held here; the graph is the derived view handed to the
/// presentation layer.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    /// Unique id for this analysis run.
    pub id: String,
    /// Name of the analyzed design.
    pub design: String,
    /// Stage-1 result: the connection type legend.
    pub connection_types: Vec<ConnectionType>,
    /// Stage-2 result: the raw connection records.
    pub connections: Vec<Connection>,
    /// Directed graph derived from the connection records.
    pub graph: DesignGraph,
    /// When the analysis completed.
    pub created_at: DateTime<Utc>,
}

impl AnalysisSession {
    /// Query this session's connections with free-text input.
    pub fn query(&self, input: &str) -> crate::error::QueryResult<QueryOutcome> {
        find_relationships(input, &self.connections)
    }

    /// Render the legend as text rows
    pub fn legend_table(&self) -> String {
        let mut table = String::from("connection_style | connection_type\n");
        for entry in &self.connection_types {
            table.push_str(&format!(
                "{} | {}\n",
                entry.connection_style, entry.connection_type
            ));
        }
        table
    }

    /// Render the connection listing as text
    pub fn connection_summary(&self) -> String {
        let mut summary = String::new();
        for connection in &self.connections {
            summary.push_str(&format!(
                "Component {} - {}\n",
                connection.component_number, connection.component_name
            ));
            for target in &connection.connected_to {
                summary.push_str(&format!(
                    " - Connected to: {} - {}, Connection Type: {}, Style: {}\n",
                    target.component_number,
                    target.component_name,
                    target.connection_type,
                    target.connection_style
                ));
            }
        }
        summary
    }
}

/// Orchestrates the two-stage extraction pipeline for a design
#[derive(Clone)]
pub struct Analyzer {
    client: ModelClient,
    designs: DesignConfig,
}

impl Analyzer {
    /// Create a new analyzer
    pub fn new(client: ModelClient, config: &Config) -> Self {
        Self {
            client,
            designs: config.designs.clone(),
        }
    }

    /// Path of a design's schematic page image
    pub fn schema_path(&self, design: &str) -> PathBuf {
        self.designs
            .root
            .join(design)
            .join(format!("{}_schema.png", design))
    }

    /// Path of the stitched legend+schematic composite, derived from the
    /// schematic path by substring replacement. The `_stitchted` spelling
    /// matches the pre-built artifact names.
    pub fn stitched_path(schema_path: &Path) -> PathBuf {
        PathBuf::from(
            schema_path
                .to_string_lossy()
                .replace("_schema.png", "_stitchted.png"),
        )
    }

    /// Run the full two-stage analysis for a design.
    ///
    /// Strictly sequential: the second stage's prompt is built from the
    /// first stage's parsed reply, so stage 2 cannot start until stage 1
    /// has completed. Every failure (image read, model call, reply parse)
    /// is fatal for the run and propagates to the caller.
    pub async fn analyze(&self, design: &str) -> AppResult<AnalysisSession> {
        let start = Instant::now();
        let schema_path = self.schema_path(design);

        info!(design = %design, image = %schema_path.display(), "Analyzing connection types");
        let schema_data_url = image_to_data_url(&schema_path)?;
        let reply = self
            .client
            .analyze_image(
                CONNECTION_TYPES_SYSTEM_PROMPT,
                CONNECTION_TYPES_USER_PROMPT,
                &schema_data_url,
            )
            .await?;
        let legend = ConnectionLegend::from_reply(&reply)?;
        debug!(
            design = %design,
            connection_types = legend.connection_types.len(),
            "Connection type legend parsed"
        );

        let stitched_path = Self::stitched_path(&schema_path);
        info!(design = %design, image = %stitched_path.display(), "Analyzing connections");
        let stitched_data_url = image_to_data_url(&stitched_path)?;
        let system_prompt = connection_graph_system_prompt(&legend.to_json()?);
        let reply = self
            .client
            .analyze_image(
                &system_prompt,
                CONNECTION_GRAPH_USER_PROMPT,
                &stitched_data_url,
            )
            .await?;
        let connections = DesignConnections::from_reply(&reply)?.connections;

        let graph = DesignGraph::from_connections(&connections);
        info!(
            design = %design,
            components = graph.node_count(),
            connections = graph.edge_count(),
            latency_ms = start.elapsed().as_millis(),
            "Analysis completed"
        );

        Ok(AnalysisSession {
            id: Uuid::new_v4().to_string(),
            design: design.to_string(),
            connection_types: legend.connection_types,
            connections,
            graph,
            created_at: Utc::now(),
        })
    }

    /// Names of the designs known to this analyzer
    pub fn designs(&self) -> &[String] {
        &self.designs.designs
    }
}
