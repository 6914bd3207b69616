//! Integration tests for the chat completions client
//!
//! Tests HTTP client behavior using wiremock for request/response mocking.

use serde_json::json;
use wiremock::{
    matchers::{body_string_contains, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use schematic_vision_analyzer::config::{AzureOpenAiConfig, RequestConfig};
use schematic_vision_analyzer::error::ModelError;
use schematic_vision_analyzer::model::ModelClient;

const DEPLOYMENT: &str = "o1-test";
const COMPLETIONS_PATH: &str = "/openai/deployments/o1-test/chat/completions";

/// Create a test client pointing to the mock server
fn create_test_client(endpoint: &str) -> ModelClient {
    let config = AzureOpenAiConfig {
        endpoint: endpoint.to_string(),
        api_key: "test-api-key".to_string(),
        api_version: "2024-12-01-preview".to_string(),
        deployment: DEPLOYMENT.to_string(),
    };

    let request_config = RequestConfig { timeout_ms: 5000 };

    ModelClient::new(&config, request_config).expect("Failed to create client")
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ],
        "model": "o1",
        "usage": {"prompt_tokens": 900, "completion_tokens": 120, "total_tokens": 1020}
    })
}

#[cfg(test)]
mod analyze_image_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_call_returns_top_choice_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(query_param("api-version", "2024-12-01-preview"))
            .and(header("api-key", "test-api-key"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body(r#"{"connection_types":[]}"#)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system prompt", "user prompt", "data:image/png;base64,AAAA")
            .await;

        assert!(result.is_ok(), "call should succeed: {:?}", result.err());
        assert_eq!(result.unwrap(), r#"{"connection_types":[]}"#);
    }

    #[tokio::test]
    async fn test_request_body_carries_text_and_image_parts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(body_string_contains("\"model\":\"o1-test\""))
            .and(body_string_contains("\"type\":\"text\""))
            .and(body_string_contains("\"type\":\"image_url\""))
            .and(body_string_contains("data:image/png;base64,AAAA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system prompt", "user prompt", "data:image/png;base64,AAAA")
            .await;

        assert!(result.is_ok(), "body should have matched: {:?}", result.err());
    }

    #[tokio::test]
    async fn test_temperature_not_sent_by_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(body_string_contains("temperature"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(0)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system", "user", "data:image/png;base64,AAAA")
            .await;

        assert!(result.is_ok());
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_authentication_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"code": "401", "message": "Access denied due to invalid subscription key"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system", "user", "data:image/png;base64,AAAA")
            .await;

        match result {
            Err(ModelError::Api { status: 401, .. }) => {}
            other => panic!("expected 401 Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"error": {"message": "Rate limit exceeded"}}))
                    .insert_header("Retry-After", "60"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system", "user", "data:image/png;base64,AAAA")
            .await;

        // One call, no retry: the rate limit surfaces directly.
        match result {
            Err(ModelError::Api { status: 429, .. }) => {}
            other => panic!("expected 429 Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": [], "model": null, "usage": null})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system", "user", "data:image/png;base64,AAAA")
            .await;

        assert!(matches!(result, Err(ModelError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_missing_message_content_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "content_filter"}],
                "model": null,
                "usage": null
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system", "user", "data:image/png;base64,AAAA")
            .await;

        assert!(matches!(result, Err(ModelError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_malformed_response_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze_image("system", "user", "data:image/png;base64,AAAA")
            .await;

        assert!(matches!(result, Err(ModelError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn test_request_timeout() {
        use std::time::Duration;

        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("slow"))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&mock_server)
            .await;

        let config = AzureOpenAiConfig {
            endpoint: mock_server.uri(),
            api_key: "test-api-key".to_string(),
            api_version: "2024-12-01-preview".to_string(),
            deployment: DEPLOYMENT.to_string(),
        };
        let client = ModelClient::new(&config, RequestConfig { timeout_ms: 100 }).unwrap();

        let result = client
            .analyze_image("system", "user", "data:image/png;base64,AAAA")
            .await;

        assert!(matches!(result, Err(ModelError::Timeout { timeout_ms: 100 })));
    }
}
