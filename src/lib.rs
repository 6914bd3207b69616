//! # Schematic Vision Analyzer
//!
//! Interprets hydraulic schematic diagrams with a vision-capable language
//! model and lets a user interactively query the extracted connection
//! graph.
//!
//! ## Pipeline
//!
//! ```text
//! schematic image → data URL → model (stage 1: legend)
//!                                ↓ parsed connection types
//! stitched image  → data URL → model (stage 2: connections, prompt
//!                                      parameterized by stage 1)
//!                                ↓ parsed connection records
//!                         DesignGraph + AnalysisSession
//!                                ↓ free-text queries
//!                         subgraph + text summary
//! ```
//!
//! The two stages are strictly sequential, synchronous per user action,
//! and unrecovered on failure: a bad image path, a failed model call, or
//! a reply that is not valid JSON ends the analysis run.
//!
//! ## Example
//!
//! ```ignore
//! use schematic_vision_analyzer::{Analyzer, Config};
//! use schematic_vision_analyzer::model::ModelClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = ModelClient::new(&config.azure, config.request.clone())?;
//!     let analyzer = Analyzer::new(client, &config);
//!     let session = analyzer.analyze("Hydraulic_design").await?;
//!     println!("{}", session.connection_summary());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Analysis pipeline and session state.
pub mod analysis;
/// Configuration management.
pub mod config;
/// Image file to data-URL encoding.
pub mod encoding;
/// Error types and result aliases for the application.
pub mod error;
/// Directed connection graph built from extracted records.
pub mod graph;
/// Chat completions client and wire types.
pub mod model;
/// System and user prompts for the two extraction stages.
pub mod prompts;
/// Free-text relationship queries.
pub mod query;
/// Typed schemas for model replies.
pub mod schema;

pub use analysis::{AnalysisSession, Analyzer};
pub use config::Config;
pub use error::{AppError, AppResult};
