//! Crop value object: a normalized bounding box.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};

/// A rectangular region of an image, in fractions of its height and width.
///
/// Every edge lies in `[0, 1]`, `top < bottom` and `left < right`. The
/// constructor and the deserializer both enforce this, so a `Crop` value is
/// always well formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crop {
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
}

impl Crop {
    /// Create a crop from its four edges.
    ///
    /// # Errors
    ///
    /// - `ValidationError::CropOutOfRange` if an edge is outside `[0, 1]` or NaN
    /// - `ValidationError::CropInverted` if `top >= bottom` or `left >= right`
    ///
    /// # Example
    ///
    /// ```
    /// use clarifai_feedback::domain::Crop;
    ///
    /// let crop = Crop::new(0.1, 0.2, 0.3, 0.4).unwrap();
    /// assert_eq!(crop.top(), 0.1);
    /// assert!(Crop::new(0.5, 0.2, 0.3, 0.4).is_err());
    /// ```
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Result<Self, ValidationError> {
        for (edge, value) in [
            ("top", top),
            ("bottom", bottom),
            ("left", left),
            ("right", right),
        ] {
            // NaN fails this check too
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::CropOutOfRange { edge, value });
            }
        }

        if top >= bottom {
            return Err(ValidationError::CropInverted { axis: "vertical" });
        }
        if left >= right {
            return Err(ValidationError::CropInverted {
                axis: "horizontal",
            });
        }

        Ok(Self {
            top,
            bottom,
            left,
            right,
        })
    }

    /// The crop covering the whole image.
    pub fn full() -> Self {
        Self {
            top: 0.0,
            bottom: 1.0,
            left: 0.0,
            right: 1.0,
        }
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }
}

#[derive(Deserialize)]
struct RawCrop {
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
}

impl<'de> Deserialize<'de> for Crop {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCrop::deserialize(deserializer)?;
        Crop::new(raw.top, raw.bottom, raw.left, raw.right).map_err(serde::de::Error::custom)
    }
}
