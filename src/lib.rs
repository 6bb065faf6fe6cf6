//! Clarifai Feedback - a client SDK for sending model feedback to the Clarifai vision API.
//!
//! Feedback tells a model whether its predictions were right: which concepts
//! are in an image, where regions are, and who a face belongs to. Requests are
//! built fluently from a [`ClarifaiClient`] and sent with one HTTP call.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (model IDs, crop bounds)
//! - **models**: Feedback records, image references, public models
//! - **requests**: The fluent feedback request builder
//! - **client**: HTTP client, reply interpretation, async wrapper
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Request and outcome counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod requests;

pub use client::{
    ApiResponse, ApiStatus, AsyncClarifaiClient, AsyncClarifaiClientImpl, ClarifaiClient,
    FeedbackReceipt,
};
pub use config::Config;
pub use domain::{Crop, ModelId, ValidationError};
pub use error::{ClientError, ClientResult, ConfigError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{
    ConceptFeedback, DefaultModels, EventType, FaceFeedback, Feedback, ImageSource, ModelRef,
    RegionFeedback,
};
pub use requests::{AddModelFeedbackRequest, FeedbackPayload};
