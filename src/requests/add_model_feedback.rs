//! Builder for "add model feedback" requests.

use crate::client::{ApiResponse, ClarifaiClient, FeedbackReceipt};
use crate::domain::{ModelId, ValidationError};
use crate::error::ClientResult;
use crate::models::{ConceptFeedback, EventType, ImageSource, RegionFeedback};
use serde::{Deserialize, Serialize};

/// Wire body of a model feedback request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    /// The model the feedback is about
    pub id: ModelId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Base64-encoded image, when no URL is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_bytes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<ConceptFeedback>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<RegionFeedback>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,

    /// ID of the prediction output the feedback answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_id: Option<String>,
}

/// Fluent builder for a model feedback request.
///
/// Each `with_*` call consumes the builder and returns the updated one, so a
/// builder is spent by the time it's executed. Setting a field twice keeps
/// the last value.
#[derive(Clone)]
#[must_use = "a feedback request does nothing until it is executed"]
pub struct AddModelFeedbackRequest {
    client: ClarifaiClient,
    id: Option<String>,
    image: Option<ImageSource>,
    concepts: Vec<ConceptFeedback>,
    regions: Vec<RegionFeedback>,
    end_user_id: Option<String>,
    session_id: Option<String>,
    event_type: Option<EventType>,
    output_id: Option<String>,
}

impl AddModelFeedbackRequest {
    pub(crate) fn new(client: ClarifaiClient) -> Self {
        Self {
            client,
            id: None,
            image: None,
            concepts: Vec::new(),
            regions: Vec::new(),
            end_user_id: None,
            session_id: None,
            event_type: None,
            output_id: None,
        }
    }

    /// ID of the model the feedback is about.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Image to give feedback on, by URL. Replaces any image bytes.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image = Some(ImageSource::Url(url.into()));
        self
    }

    /// Image to give feedback on, by content. Replaces any image URL.
    pub fn with_image_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.image = Some(ImageSource::Bytes(bytes.into()));
        self
    }

    /// Whole-image concept feedback.
    pub fn with_concepts(mut self, concepts: impl IntoIterator<Item = ConceptFeedback>) -> Self {
        self.concepts = concepts.into_iter().collect();
        self
    }

    /// Per-region feedback.
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = RegionFeedback>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    pub fn with_end_user_id(mut self, end_user_id: impl Into<String>) -> Self {
        self.end_user_id = Some(end_user_id.into());
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn with_output_id(mut self, output_id: impl Into<String>) -> Self {
        self.output_id = Some(output_id.into());
        self
    }

    /// Assemble the wire payload without sending it.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyId` if no model ID (or a blank one) was set
    /// - `ValidationError::MissingImage` if neither an image URL nor bytes were set
    pub fn build(&self) -> Result<FeedbackPayload, ValidationError> {
        let id = ModelId::new(self.id.clone().unwrap_or_default())?;
        let image = self.image.as_ref().ok_or(ValidationError::MissingImage)?;

        Ok(FeedbackPayload {
            id,
            image_url: image.url().map(str::to_string),
            image_bytes: image.encoded_bytes(),
            concepts: self.concepts.clone(),
            regions: self.regions.clone(),
            end_user_id: self.end_user_id.clone(),
            session_id: self.session_id.clone(),
            event_type: self.event_type,
            output_id: self.output_id.clone(),
        })
    }

    /// Send the request.
    ///
    /// Local validation failures and transport failures are `Err`. Anything
    /// the service answered, including rejections, is `Ok`.
    pub fn execute(self) -> ClientResult<ApiResponse<FeedbackReceipt>> {
        let payload = self.build()?;
        self.client.send_feedback(&payload)
    }
}
