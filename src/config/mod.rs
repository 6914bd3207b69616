use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub azure: AzureOpenAiConfig,
    pub designs: DesignConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
}

/// Azure OpenAI endpoint configuration
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    pub deployment: String,
}

/// Design catalog configuration
///
/// `root` is the directory holding one subdirectory per design, each with
/// the pre-built `{design}_schema.png` and `{design}_stitchted.png` images.
#[derive(Debug, Clone)]
pub struct DesignConfig {
    pub root: PathBuf,
    pub designs: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
///
/// Deliberately has no retry settings: a failed model call fails the
/// whole analysis run.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
}

const DEFAULT_DESIGNS: &str = "Hydraulic_design,462-Piping,abb,ML102530301";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let azure = AzureOpenAiConfig {
            endpoint: env::var("AOAI_ENDPOINT")
                .map(|s| s.trim_end_matches('/').to_string())
                .map_err(|_| AppError::Config {
                    message: "AOAI_ENDPOINT is required".to_string(),
                })?,
            api_key: env::var("AOAI_API_KEY").map_err(|_| AppError::Config {
                message: "AOAI_API_KEY is required".to_string(),
            })?,
            api_version: env::var("AOAI_API_VERSION")
                .unwrap_or_else(|_| "2024-12-01-preview".to_string()),
            deployment: env::var("AOAI_DEPLOYMENT_NAME").map_err(|_| AppError::Config {
                message: "AOAI_DEPLOYMENT_NAME is required".to_string(),
            })?,
        };

        let designs = DesignConfig {
            root: PathBuf::from(env::var("DESIGN_ROOT").unwrap_or_else(|_| ".".to_string())),
            designs: env::var("DESIGN_LIST")
                .unwrap_or_else(|_| DEFAULT_DESIGNS.to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120_000),
        };

        Ok(Config {
            azure,
            designs,
            logging,
            request,
        })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 120_000,
        }
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            designs: DEFAULT_DESIGNS.split(',').map(String::from).collect(),
        }
    }
}
