//! Image reference carried by a feedback request.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Where the service finds the image the feedback is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A publicly reachable URL; the service fetches it
    Url(String),
    /// Raw image bytes, sent base64-encoded
    Bytes(Vec<u8>),
}

impl ImageSource {
    /// Base64 encoding of the bytes, or `None` for a URL.
    pub fn encoded_bytes(&self) -> Option<String> {
        match self {
            Self::Url(_) => None,
            Self::Bytes(bytes) => Some(STANDARD.encode(bytes)),
        }
    }

    /// The URL, or `None` for raw bytes.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Bytes(_) => None,
        }
    }
}
