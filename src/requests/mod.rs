//! Request builders.

pub mod add_model_feedback;

pub use add_model_feedback::{AddModelFeedbackRequest, FeedbackPayload};
