/// Wire types for the Gemini generateContent endpoint
///
/// These mirror the REST JSON shapes (camelCase on the wire). Only the
/// fields this app actually reads are modeled; everything else in the
/// response is ignored by serde.

use serde::{Deserialize, Serialize};

/// Top-level request body for `models/<model>:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// A single content block holding ordered parts.
#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<RequestPart>,
}

/// A request part: either the text prompt or the inline source image.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

/// Base64 image payload with its MIME type.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

/// Response body. Candidates may be absent entirely on blocked prompts.
#[derive(Debug, Deserialize)]
pub struct EditResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}
