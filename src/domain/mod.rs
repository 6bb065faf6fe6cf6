//! Domain value objects and types.
//!
//! Type-safe wrappers that validate at construction time, so malformed
//! model IDs or crop bounds are caught before a request is sent.

pub mod crop;
pub mod errors;
pub mod model_id;

pub use crop::Crop;
pub use errors::ValidationError;
pub use model_id::ModelId;
