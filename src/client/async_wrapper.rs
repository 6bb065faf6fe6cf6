//! Async wrapper around synchronous ClarifaiClient.
//!
//! This module provides an async interface to the synchronous ClarifaiClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::{ApiResponse, ClarifaiClient, FeedbackReceipt};
use crate::error::{ClientError, ClientResult};
use crate::requests::FeedbackPayload;
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for feedback operations.
#[async_trait]
pub trait AsyncClarifaiClient: Send + Sync {
    async fn send_feedback(
        &self,
        payload: FeedbackPayload,
    ) -> ClientResult<ApiResponse<FeedbackReceipt>>;
}

/// Async wrapper around synchronous ClarifaiClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncClarifaiClientImpl {
    client: Arc<ClarifaiClient>,
}

impl AsyncClarifaiClientImpl {
    pub fn new(client: ClarifaiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &ClarifaiClient {
        &self.client
    }
}

#[async_trait]
impl AsyncClarifaiClient for AsyncClarifaiClientImpl {
    async fn send_feedback(
        &self,
        payload: FeedbackPayload,
    ) -> ClientResult<ApiResponse<FeedbackReceipt>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.send_feedback(&payload))
            .await
            .map_err(|e| ClientError::Http(format!("Task join error: {}", e)))?
    }
}
