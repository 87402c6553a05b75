//! Custom axum extractors.

mod json_payload;

pub use json_payload::JsonPayload;
