//! Public models the service ships with.
//!
//! Feedback always targets a model. These are the models every account can
//! reach without training its own.

use crate::domain::ModelId;

/// What a model predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Predicts concepts for the whole image
    Concept,
    /// Predicts regions (faces, logos) with concepts
    Detection,
    /// Predicts dominant colors
    Color,
    /// Produces embedding vectors
    Embedding,
}

/// A reference to a model by ID, with a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRef {
    id: ModelId,
    name: &'static str,
    kind: ModelKind,
}

impl ModelRef {
    /// Reference a model by ID, e.g. one trained on the caller's own account.
    pub fn custom(id: ModelId) -> Self {
        Self {
            id,
            name: "custom",
            kind: ModelKind::Concept,
        }
    }

    fn public(id: &'static str, name: &'static str, kind: ModelKind) -> Self {
        Self {
            id: ModelId::from_static(id),
            name,
            kind,
        }
    }

    pub fn id(&self) -> &ModelId {
        &self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }
}

/// Lookup of the public models.
///
/// ```
/// use clarifai_feedback::models::DefaultModels;
///
/// let travel = DefaultModels::new().travel_model();
/// assert_eq!(travel.name(), "travel-v1.0");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultModels;

impl DefaultModels {
    pub fn new() -> Self {
        Self
    }

    pub fn general_model(&self) -> ModelRef {
        ModelRef::public(
            "aaa03c23b3724a16a56b629203edc62c",
            "general-v1.3",
            ModelKind::Concept,
        )
    }

    pub fn travel_model(&self) -> ModelRef {
        ModelRef::public(
            "eee28c313d69466f836ab83287a54ed9",
            "travel-v1.0",
            ModelKind::Concept,
        )
    }

    pub fn food_model(&self) -> ModelRef {
        ModelRef::public(
            "bd367be194cf45149e75f01d59f77ba7",
            "food-items-v1.0",
            ModelKind::Concept,
        )
    }

    pub fn nsfw_model(&self) -> ModelRef {
        ModelRef::public(
            "e9576d86d2004ed1a38ba0cf39ecb4b1",
            "nsfw-v1.0",
            ModelKind::Concept,
        )
    }

    pub fn wedding_model(&self) -> ModelRef {
        ModelRef::public(
            "c386b7a870114f4a87477c0824499348",
            "weddings-v1.0",
            ModelKind::Concept,
        )
    }

    pub fn apparel_model(&self) -> ModelRef {
        ModelRef::public(
            "e0be3b9d6a454f0493ac3a30784001ff",
            "apparel",
            ModelKind::Concept,
        )
    }

    pub fn color_model(&self) -> ModelRef {
        ModelRef::public(
            "eeed0b6733a644cea07cf4c60f87ebb7",
            "color",
            ModelKind::Color,
        )
    }

    pub fn face_detection_model(&self) -> ModelRef {
        ModelRef::public(
            "a403429f2ddf4b49b307e318f00e528b",
            "face-v1.3",
            ModelKind::Detection,
        )
    }

    pub fn celebrity_model(&self) -> ModelRef {
        ModelRef::public(
            "e466caa0619f444ab97497640cefc4dc",
            "celeb-v1.3",
            ModelKind::Detection,
        )
    }

    pub fn demographics_model(&self) -> ModelRef {
        ModelRef::public(
            "c0c0ac362b03416da06ab3fa36fb58e3",
            "demographics",
            ModelKind::Detection,
        )
    }

    pub fn logo_model(&self) -> ModelRef {
        ModelRef::public(
            "c443119bf2ed4da98487520d01a0b1e3",
            "logo",
            ModelKind::Detection,
        )
    }

    pub fn general_embedding_model(&self) -> ModelRef {
        ModelRef::public(
            "bbb5f41425b8468d9b7a554ff10f8581",
            "general-v1.3",
            ModelKind::Embedding,
        )
    }

    /// Every public model, for lookups by name.
    pub fn all(&self) -> Vec<ModelRef> {
        vec![
            self.general_model(),
            self.travel_model(),
            self.food_model(),
            self.nsfw_model(),
            self.wedding_model(),
            self.apparel_model(),
            self.color_model(),
            self.face_detection_model(),
            self.celebrity_model(),
            self.demographics_model(),
            self.logo_model(),
            self.general_embedding_model(),
        ]
    }

    /// Find a public model by its name, e.g. `"travel-v1.0"`.
    ///
    /// Names are shared between a concept model and its embedding twin; the
    /// concept model wins.
    pub fn find_by_name(&self, name: &str) -> Option<ModelRef> {
        self.all().into_iter().find(|model| model.name == name)
    }
}
