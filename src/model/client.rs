use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, error, info};

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::{AzureOpenAiConfig, RequestConfig};
use crate::error::{ModelError, ModelResult};

/// Client for the Azure OpenAI chat completions endpoint
#[derive(Clone)]
pub struct ModelClient {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
    request_config: RequestConfig,
}

impl ModelClient {
    /// Create a new model client
    pub fn new(config: &AzureOpenAiConfig, request_config: RequestConfig) -> ModelResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_config.timeout_ms))
            .build()
            .map_err(ModelError::Http)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            deployment: config.deployment.clone(),
            request_config,
        })
    }

    /// Ask the model to analyze an embedded image.
    ///
    /// Sends one chat completion request (system message, then a user
    /// message with text and image parts) and returns the top choice's
    /// message content. One network call, no retry: any failure is fatal
    /// for the enclosing analysis run.
    pub async fn analyze_image(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        image_data_url: &str,
    ) -> ModelResult<String> {
        let request = ChatRequest::new(
            self.deployment.clone(),
            vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user_with_image(user_prompt, image_data_url),
            ],
        );

        let start = Instant::now();

        match self.execute_request(&request).await {
            Ok(answer) => {
                info!(
                    deployment = %self.deployment,
                    latency_ms = start.elapsed().as_millis(),
                    answer_len = answer.len(),
                    "Image analysis call succeeded"
                );
                Ok(answer)
            }
            Err(e) => {
                error!(
                    deployment = %self.deployment,
                    error = %e,
                    latency_ms = start.elapsed().as_millis(),
                    "Image analysis call failed"
                );
                Err(e)
            }
        }
    }

    /// Execute a single request (internal)
    async fn execute_request(&self, request: &ChatRequest) -> ModelResult<String> {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint, self.deployment
        );

        debug!(
            deployment = %self.deployment,
            messages = request.messages.len(),
            "Calling chat completions endpoint"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout {
                        timeout_ms: self.request_config.timeout_ms,
                    }
                } else {
                    ModelError::Http(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| ModelError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        chat_response
            .top_content()
            .map(str::to_string)
            .ok_or(ModelError::EmptyResponse)
    }

    /// Get the endpoint base URL (for testing)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
