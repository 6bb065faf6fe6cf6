//! Domain validation errors.

use std::fmt;

/// Errors raised locally, before a request leaves the process.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// A crop edge lies outside `[0, 1]` (or is NaN).
    CropOutOfRange { edge: &'static str, value: f32 },

    /// A crop's start edge is not strictly before its end edge.
    CropInverted { axis: &'static str },

    /// No image URL or image bytes were given.
    MissingImage,

    /// The event type string is not one the service accepts.
    UnknownEventType(String),

    /// The region feedback label is not one the service accepts.
    UnknownFeedback(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::CropOutOfRange { edge, value } => {
                write!(f, "Crop {} must be within [0, 1], got {}", edge, value)
            }
            Self::CropInverted { axis } => write!(f, "Crop is inverted on the {} axis", axis),
            Self::MissingImage => write!(f, "An image URL or image bytes are required"),
            Self::UnknownEventType(value) => write!(f, "Unknown event type: {}", value),
            Self::UnknownFeedback(value) => write!(f, "Unknown feedback: {}", value),
        }
    }
}

impl std::error::Error for ValidationError {}
