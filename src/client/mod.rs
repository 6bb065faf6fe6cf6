//! HTTP client for the Clarifai API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and the interpretation of service status blocks.

mod async_wrapper;
mod response;

pub use async_wrapper::{AsyncClarifaiClient, AsyncClarifaiClientImpl};
pub use response::{ApiResponse, ApiStatus, FeedbackReceipt, HttpReply, STATUS_SUCCESS};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::metrics::Metrics;
use crate::models::DefaultModels;
use crate::requests::{AddModelFeedbackRequest, FeedbackPayload};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the Clarifai API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. Cloning is cheap:
/// clones share the agent and the metrics.
#[derive(Clone)]
pub struct ClarifaiClient {
    /// Base URL for the API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ClarifaiClient {
    /// Create a new ClarifaiClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ClarifaiClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The public models feedback can target.
    pub fn default_models(&self) -> DefaultModels {
        DefaultModels::new()
    }

    /// Start building a model feedback request.
    ///
    /// ```no_run
    /// use clarifai_feedback::models::ConceptFeedback;
    /// use clarifai_feedback::{ClarifaiClient, EventType};
    ///
    /// let client = ClarifaiClient::with_base_url(
    ///     "https://api.clarifai.com".to_string(),
    ///     "my-key".to_string(),
    /// );
    /// let response = client
    ///     .add_model_feedback()
    ///     .with_id(client.default_models().travel_model().id().as_str())
    ///     .with_image_url("https://samples.clarifai.com/metro-north.jpg")
    ///     .with_concepts([ConceptFeedback::for_id_and_value("train", true)])
    ///     .with_event_type(EventType::Annotation)
    ///     .execute()
    ///     .unwrap();
    /// println!("accepted: {}", response.is_successful());
    /// ```
    pub fn add_model_feedback(&self) -> AddModelFeedbackRequest {
        AddModelFeedbackRequest::new(self.clone())
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with authentication and JSON body.
    ///
    /// Non-2xx replies come back as `Ok`; only transport failures are errors.
    fn post(&self, path: &str, body: &serde_json::Value) -> ClientResult<HttpReply> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = match self
            .agent
            .post(&url)
            .set("Authorization", &format!("Key {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
        {
            Ok(response) => {
                let status = response.status();
                response
                    .into_string()
                    .map(|body| HttpReply { status, body })
                    .map_err(|e| ClientError::Http(e.to_string()))
            }
            Err(ureq::Error::Status(status, response)) => Ok(HttpReply {
                status,
                body: Self::read_error_body(status, response),
            }),
            Err(ureq::Error::Transport(transport)) => Err(Self::map_transport_error(transport)),
        };

        let duration = start.elapsed();
        match &result {
            Ok(reply) => {
                tracing::debug!("POST {} - Replied (status: {})", url, reply.status);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
            }
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Read the body of a non-2xx reply. An unreadable body becomes empty.
    fn read_error_body(status: u16, response: ureq::Response) -> String {
        response.into_string().unwrap_or_else(|e| {
            tracing::warn!("Failed to read body of HTTP {} reply: {}", status, e);
            String::new()
        })
    }

    /// Map a ureq transport error to a ClientError.
    ///
    /// Only an I/O error that is itself a timeout maps to `Timeout`.
    fn map_transport_error(transport: ureq::Transport) -> ClientError {
        match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => {
                ClientError::Http("Connection failed".to_string())
            }
            ureq::ErrorKind::Io if Self::is_timeout(&transport) => ClientError::Timeout,
            _ => ClientError::Http(transport.to_string()),
        }
    }

    fn is_timeout(transport: &ureq::Transport) -> bool {
        // Socket read timeouts surface as WouldBlock on Unix
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .map_or(false, |io| {
                matches!(
                    io.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
    }

    // ========================= Feedback Operations =========================

    /// Send an assembled feedback payload to its model.
    ///
    /// Returns `ApiResponse::Failure` when the service rejects the feedback
    /// and `Err` only when the payload can't be encoded or the call never
    /// got an answer.
    pub fn send_feedback(
        &self,
        payload: &FeedbackPayload,
    ) -> ClientResult<ApiResponse<FeedbackReceipt>> {
        let path = format!(
            "/v2/models/{}/feedback",
            urlencoding::encode(payload.id.as_str())
        );
        let body = serde_json::to_value(payload)?;

        let reply = self.post(&path, &body)?;
        let status = ApiStatus::from_reply(&reply);

        if !status.is_success() {
            tracing::warn!(
                model_id = %payload.id,
                http_code = status.http_code,
                code = status.code,
                "Feedback rejected: {}",
                status.description
            );
            self.metrics.record_feedback_rejected();
            return Ok(ApiResponse::Failure { status });
        }

        let body = if reply.body.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&reply.body)?
        };

        tracing::info!(model_id = %payload.id, "Feedback accepted");
        self.metrics.record_feedback_accepted();

        Ok(ApiResponse::Successful {
            status,
            value: FeedbackReceipt {
                model_id: payload.id.clone(),
                body,
            },
        })
    }
}
