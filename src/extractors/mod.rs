//! Request extractors that reject with `AppError` so every failure shares one body shape.

pub mod id;
pub mod json;

pub use id::ResourceId;
pub use json::JsonBody;
