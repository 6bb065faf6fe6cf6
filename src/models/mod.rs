//! Data models for model feedback requests.
//!
//! Feedback records (concepts, regions, faces), the image reference a request
//! points at, and the public models feedback can target.

pub mod feedback;
pub mod image;
pub mod model;

pub use feedback::{ConceptFeedback, EventType, FaceFeedback, Feedback, RegionFeedback};
pub use image::ImageSource;
pub use model::{DefaultModels, ModelKind, ModelRef};
