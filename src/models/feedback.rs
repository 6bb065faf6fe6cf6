//! Feedback records attached to a model feedback request.
//!
//! These are small immutable values: built once, serialized into the request
//! body, then dropped.

use crate::domain::{Crop, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a concept is present in the image (or region).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptFeedback {
    id: String,
    value: bool,
}

impl ConceptFeedback {
    /// Feedback that concept `id` is present (`true`) or absent (`false`).
    pub fn for_id_and_value(id: impl Into<String>, value: bool) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

/// Feedback on a detected face: who it is, and what it looks like.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceFeedback {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    identity_feedback: Vec<ConceptFeedback>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attribute_feedback: Vec<ConceptFeedback>,
}

impl FaceFeedback {
    pub fn make(
        identity_feedback: Vec<ConceptFeedback>,
        attribute_feedback: Vec<ConceptFeedback>,
    ) -> Self {
        Self {
            identity_feedback,
            attribute_feedback,
        }
    }

    pub fn identity_feedback(&self) -> &[ConceptFeedback] {
        &self.identity_feedback
    }

    pub fn attribute_feedback(&self) -> &[ConceptFeedback] {
        &self.attribute_feedback
    }
}

/// How well the model located a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// The region was detected where it should be
    Accurate,
    /// The region exists but the box is off
    Misplaced,
    /// The model missed this region
    NotDetected,
    /// The model reported a region that isn't there
    FalsePositive,
}

impl Feedback {
    /// Wire name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accurate => "accurate",
            Self::Misplaced => "misplaced",
            Self::NotDetected => "not_detected",
            Self::FalsePositive => "false_positive",
        }
    }
}

impl FromStr for Feedback {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accurate" => Ok(Self::Accurate),
            "misplaced" => Ok(Self::Misplaced),
            "not_detected" => Ok(Self::NotDetected),
            "false_positive" => Ok(Self::FalsePositive),
            _ => Err(ValidationError::UnknownFeedback(s.to_string())),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user action that produced the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// The user labelled the image
    Annotation,
    /// The user clicked a search result
    SearchClick,
}

impl EventType {
    /// Wire name of the event type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::SearchClick => "search_click",
        }
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annotation" => Ok(Self::Annotation),
            "search_click" => Ok(Self::SearchClick),
            _ => Err(ValidationError::UnknownEventType(s.to_string())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback on one region of the image.
///
/// # Example
///
/// ```
/// use clarifai_feedback::domain::Crop;
/// use clarifai_feedback::models::{ConceptFeedback, Feedback, RegionFeedback};
///
/// let region = RegionFeedback::make(Crop::new(0.1, 0.2, 0.3, 0.4).unwrap(), Feedback::Accurate)
///     .with_concept_feedbacks([ConceptFeedback::for_id_and_value("car", false)]);
/// assert_eq!(region.concept_feedbacks().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionFeedback {
    crop: Crop,

    feedback: Feedback,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    concept_feedbacks: Vec<ConceptFeedback>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    face_feedback: Option<FaceFeedback>,
}

impl RegionFeedback {
    pub fn make(crop: Crop, feedback: Feedback) -> Self {
        Self {
            crop,
            feedback,
            concept_feedbacks: Vec::new(),
            face_feedback: None,
        }
    }

    /// Replace the concept feedback for this region.
    pub fn with_concept_feedbacks(
        mut self,
        concept_feedbacks: impl IntoIterator<Item = ConceptFeedback>,
    ) -> Self {
        self.concept_feedbacks = concept_feedbacks.into_iter().collect();
        self
    }

    pub fn with_face_feedback(mut self, face_feedback: FaceFeedback) -> Self {
        self.face_feedback = Some(face_feedback);
        self
    }

    pub fn crop(&self) -> &Crop {
        &self.crop
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn concept_feedbacks(&self) -> &[ConceptFeedback] {
        &self.concept_feedbacks
    }

    pub fn face_feedback(&self) -> Option<&FaceFeedback> {
        self.face_feedback.as_ref()
    }
}
