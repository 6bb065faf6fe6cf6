//! End-to-end test utilities and shared configuration.
//!
//! This module provides common setup for tests that talk to the live API.
//! They read `CLARIFAI_API_KEY` from the environment or a `.env` file.

use clarifai_feedback::{ApiResponse, ClarifaiClient, ClientResult, FeedbackReceipt};
use std::env;

/// A public sample image the service can fetch.
pub const FAMILY_IMAGE_URL: &str = "https://samples.clarifai.com/family.jpg";

/// Test configuration loaded from environment variables.
pub struct TestConfig {
    pub api_key: String,
    pub base_url: String,
}

impl TestConfig {
    /// Load configuration from .env file.
    ///
    /// # Panics
    /// Panics if CLARIFAI_API_KEY is not set in the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_key: env::var("CLARIFAI_API_KEY")
                .expect("CLARIFAI_API_KEY must be set in .env file for E2E tests"),
            base_url: env::var("CLARIFAI_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.clarifai.com".to_string()),
        }
    }
}

/// Create a ClarifaiClient configured for testing.
pub fn setup_test_client() -> ClarifaiClient {
    let config = TestConfig::from_env();
    ClarifaiClient::with_base_url(config.base_url, config.api_key)
}

/// Assert that the service accepted the request.
pub fn assert_success(result: ClientResult<ApiResponse<FeedbackReceipt>>) {
    match result {
        Ok(ApiResponse::Successful { .. }) => {}
        Ok(ApiResponse::Failure { status }) => panic!(
            "Expected success, service rejected the request: {:?}",
            status
        ),
        Err(e) => panic!("Expected success, request failed: {}", e),
    }
}

/// Assert that the service answered and rejected the request.
pub fn assert_failure(result: ClientResult<ApiResponse<FeedbackReceipt>>) {
    match result {
        Ok(ApiResponse::Failure { .. }) => {}
        Ok(ApiResponse::Successful { status, .. }) => {
            panic!("Expected failure, service accepted the request: {:?}", status)
        }
        Err(e) => panic!("Expected a failure response, request failed: {}", e),
    }
}
