//! Typed model of the two reply schemas.
//!
//! Both extraction stages return JSON; the structs here are the explicit
//! contract. Parsing goes through [`ConnectionLegend::from_reply`] and
//! [`DesignConnections::from_reply`], which fail with a [`SchemaError`]
//! when the reply is not valid JSON for the schema (for instance when the
//! model wrapped it in prose or code fences). There is no fallback
//! extraction in the pipeline; [`extract_delimited`] is available for
//! callers that want one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchemaResult;

/// One legend entry mapping a line style to a connection type name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionType {
    /// Color and shape of the connection line, as read from the legend.
    pub connection_style: String,
    /// Connection name as listed in the legend.
    pub connection_type: String,
}

/// Stage-1 reply: the legend of connection line styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionLegend {
    pub connection_types: Vec<ConnectionType>,
}

/// Component identifier as emitted by the model.
///
/// The model may answer with a number or a string; neither is guaranteed
/// unique or stable. Component identity in the graph is the name string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentId {
    Number(i64),
    Text(String),
}

/// One end of a connection as referenced from a source component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub component_number: ComponentId,
    pub component_name: String,
    pub connection_style: String,
    pub connection_type: String,
}

/// A source component and everything it connects to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub component_number: ComponentId,
    pub component_name: String,
    pub connected_to: Vec<ConnectionTarget>,
}

/// Stage-2 reply: the full connection listing for one design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConnections {
    pub connections: Vec<Connection>,
}

impl ConnectionLegend {
    /// Parse a stage-1 model reply.
    pub fn from_reply(reply: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(reply)?)
    }

    /// Serialize the legend for substitution into the stage-2 prompt.
    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl DesignConnections {
    /// Parse a stage-2 model reply.
    pub fn from_reply(reply: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(reply)?)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Number(n) => write!(f, "{}", n),
            ComponentId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Extract the text between two delimiters.
///
/// Generic fallback for replies that wrap their payload in markers. Not
/// called by the analysis pipeline, which treats non-JSON replies as
/// fatal; kept for callers that want a salvage step.
pub fn extract_delimited<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let after_start = text.split_once(start)?.1;
    if end.is_empty() {
        return Some(after_start);
    }
    Some(after_start.split_once(end)?.0)
}
