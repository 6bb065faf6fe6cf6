//! Interpretation of API replies.
//!
//! Every reply carries a status block. A reply only counts as a success when
//! both the HTTP status and the service status say so.

use crate::domain::ModelId;
use serde::Deserialize;

/// Service status code for a successful call.
pub const STATUS_SUCCESS: u32 = 10000;

/// A raw HTTP reply, before interpretation.
#[derive(Debug, Clone)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

impl HttpReply {
    pub fn is_http_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Status block returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    /// HTTP status of the reply
    #[serde(skip)]
    pub http_code: u16,

    /// Service status code (10000 on success)
    #[serde(default)]
    pub code: u32,

    /// Short description, e.g. "Ok" or "Model does not exist"
    #[serde(default)]
    pub description: String,

    /// Longer explanation, when the service gives one
    #[serde(default)]
    pub details: Option<String>,
}

impl ApiStatus {
    /// Read the status block out of a reply.
    ///
    /// Only a successful HTTP reply with no status block at all (empty body,
    /// or JSON without a `status` key) counts as success without one. A
    /// status block that is present but malformed is a failure, as is any
    /// failed reply whose body can't be read as a status block; both keep the
    /// raw body as their description.
    pub fn from_reply(reply: &HttpReply) -> Self {
        let body = reply.body.trim();
        let json = serde_json::from_str::<serde_json::Value>(body).ok();

        match json.as_ref().and_then(|value| value.get("status")) {
            Some(block) => match ApiStatus::deserialize(block) {
                Ok(mut status) => {
                    status.http_code = reply.status;
                    status
                }
                Err(e) => {
                    tracing::warn!("Unreadable status block in reply: {}", e);
                    Self::raw_failure(reply.status, body)
                }
            },
            // A 2xx body that isn't JSON is left for the caller to reject
            None if reply.is_http_success() && json.as_ref().map_or(true, |v| v.is_object()) => {
                ApiStatus {
                    http_code: reply.status,
                    code: STATUS_SUCCESS,
                    description: "Ok".to_string(),
                    details: None,
                }
            }
            None => Self::raw_failure(reply.status, body),
        }
    }

    fn raw_failure(http_code: u16, body: &str) -> Self {
        ApiStatus {
            http_code,
            code: 0,
            description: if body.is_empty() {
                format!("HTTP {}", http_code)
            } else {
                body.to_string()
            },
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.http_code) && self.code == STATUS_SUCCESS
    }
}

/// Outcome of a call the service answered.
///
/// Remote rejections (unknown model, bad key, malformed ID) land in
/// `Failure`; they are not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Successful { status: ApiStatus, value: T },
    Failure { status: ApiStatus },
}

impl<T> ApiResponse<T> {
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Successful { .. })
    }

    pub fn status(&self) -> &ApiStatus {
        match self {
            Self::Successful { status, .. } | Self::Failure { status } => status,
        }
    }

    /// The parsed value on success.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Successful { value, .. } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<T, ApiStatus> {
        match self {
            Self::Successful { value, .. } => Ok(value),
            Self::Failure { status } => Err(status),
        }
    }
}

/// Confirmation that the service accepted a feedback request.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackReceipt {
    /// The model the feedback was sent to
    pub model_id: ModelId,

    /// Full reply body, as returned by the service
    pub body: serde_json::Value,
}
