use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

/// Model endpoint errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Response contained no message content")]
    EmptyResponse,

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Model reply schema errors
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Reply is not valid JSON for the expected schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Query input errors
///
/// A query that scans successfully and matches nothing is NOT an error;
/// see [`crate::query::QueryOutcome::NoMatch`].
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Query cannot be empty")]
    EmptyQuery,
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for model endpoint operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type alias for reply parsing
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type alias for query operations
pub type QueryResult<T> = Result<T, QueryError>;
