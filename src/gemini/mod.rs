/// Gemini edit request service
///
/// This module owns the single outbound call the app makes:
/// - Data-URL parsing of the uploaded image (service.rs)
/// - The generateContent wire types (types.rs)
/// - Request construction and response decoding (service.rs)

pub mod service;
pub mod types;

pub use service::{parse_image, GeminiClient, GeminiError, ParsedImage};
