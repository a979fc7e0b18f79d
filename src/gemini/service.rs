/// Edit request service
///
/// One public operation: send the uploaded photo plus the user's
/// instruction to Gemini 2.5 Flash Image and hand back the edited image
/// as a data URL. Everything here is a straight request/response pair,
/// no polling, no retries.

use regex::Regex;
use std::sync::OnceLock;

use super::types::{
    Content, EditRequest, EditResponse, GenerationConfig, InlineData, RequestPart,
};

/// Explicitly pinned to Gemini 2.5 Flash Image.
const MODEL_NAME: &str = "gemini-2.5-flash-image";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Errors from the edit request service.
///
/// The UI collapses all of these into one generic alert, so the variants
/// exist for logging and tests rather than for user-facing branching.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// Non-2xx status from the API (auth, quota, bad request...).
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Network or HTTP-level failure, including JSON decoding.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The call succeeded but no candidate carried inline image data.
    #[error("Tidak ada gambar yang dihasilkan oleh AI.")]
    NoImage,
}

/// MIME type and base64 payload extracted from a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedImage {
    pub mime_type: String,
    pub data: String,
}

fn data_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^data:(image/\w+);base64,(.+)$").expect("hardcoded pattern compiles")
    })
}

fn prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^data:image/\w+;base64,").expect("hardcoded pattern compiles")
    })
}

/// Parses a data URL into its MIME type and raw base64 payload.
///
/// If the string does not match the expected `data:image/...;base64,...`
/// shape, assume JPEG and strip any well-formed prefix as a best-effort
/// recovery. The caller never sees this fallback happen.
pub fn parse_image(data_url: &str) -> ParsedImage {
    if let Some(captures) = data_url_pattern().captures(data_url) {
        return ParsedImage {
            mime_type: captures[1].to_string(),
            data: captures[2].to_string(),
        };
    }

    ParsedImage {
        mime_type: "image/jpeg".to_string(),
        data: prefix_pattern().replace(data_url, "").into_owned(),
    }
}

/// Builds the fixed prompt template around the user's instruction.
///
/// The instruction is embedded verbatim; the surrounding guidelines steer
/// the model toward pose swaps for action-like instructions and literal
/// visual edits otherwise.
fn build_prompt(instruction: &str) -> String {
    format!(
        "Task: Edit the provided image according to the following instruction: \"{instruction}\".\n\
         \n\
         Guidelines:\n\
         1. The instruction might be in English or Indonesian (Bahasa Indonesia). Process it accurately.\n\
         2. If the instruction is an action (e.g., \"eating\", \"makan\", \"sleeping\", \"tidur\"), \
         modify the subject's pose and context to perform that action naturally while preserving \
         the subject's identity.\n\
         3. For general edits, strictly follow the visual changes described (e.g., lighting, \
         background, style).\n\
         4. Ensure the output is high-quality and photorealistic unless specified otherwise.\n\
         5. Return ONLY the edited image.\n"
    )
}

/// Pulls the edited image out of the response.
///
/// Only the first candidate is inspected. Its parts are scanned in order
/// and the first one carrying inline data wins; the payload is re-wrapped
/// as PNG regardless of what MIME type the model reports.
fn extract_image(response: EditResponse) -> Result<String, GeminiError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeminiError::NoImage)?;

    let content = candidate.content.ok_or(GeminiError::NoImage)?;

    for part in content.parts {
        if let Some(inline) = part.inline_data {
            if !inline.data.is_empty() {
                return Ok(format!("data:image/png;base64,{}", inline.data));
            }
        }
    }

    Err(GeminiError::NoImage)
}

/// Client for the Gemini image editing endpoint.
///
/// Cheap to clone (reqwest::Client is reference-counted), which is what
/// lets the UI hand a copy into each background task.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    /// Creates a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// A missing key is not fatal here; the first request will fail with
    /// an auth error and surface through the normal alert path.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            eprintln!("⚠️  GEMINI_API_KEY is not set; edit requests will fail");
        }
        Self::new(api_key)
    }

    /// Sends one edit request and returns the result as a PNG data URL.
    pub async fn edit_image(
        &self,
        source_image: &str,
        instruction: &str,
    ) -> Result<String, GeminiError> {
        let source = parse_image(source_image);

        let body = EditRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart::Text {
                        text: build_prompt(instruction),
                    },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: source.mime_type,
                            data: source.data,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        };

        let url = format!("{API_BASE}/{MODEL_NAME}:generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: EditResponse = response.json().await?;
        extract_image(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_valid_data_url() {
        let parsed = parse_image("data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(parsed.mime_type, "image/png");
        assert_eq!(parsed.data, "iVBORw0KGgo=");

        let parsed = parse_image("data:image/webp;base64,UklGRg==");
        assert_eq!(parsed.mime_type, "image/webp");
        assert_eq!(parsed.data, "UklGRg==");
    }

    #[test]
    fn test_parse_image_bare_payload_falls_back_to_jpeg() {
        let parsed = parse_image("aGVsbG8gd29ybGQ=");
        assert_eq!(parsed.mime_type, "image/jpeg");
        assert_eq!(parsed.data, "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_parse_image_strips_prefix_on_fallback() {
        // Multiline payloads never match the strict pattern ('.' stops at
        // newlines), but the prefix strip still recovers the body.
        let parsed = parse_image("data:image/png;base64,iVBO\nRw0K");
        assert_eq!(parsed.mime_type, "image/jpeg");
        assert_eq!(parsed.data, "iVBO\nRw0K");
    }

    #[test]
    fn test_parse_image_non_image_mime_falls_back() {
        let parsed = parse_image("data:application/pdf;base64,JVBERi0=");
        assert_eq!(parsed.mime_type, "image/jpeg");
        // Not an image/* prefix, so nothing is stripped.
        assert_eq!(parsed.data, "data:application/pdf;base64,JVBERi0=");
    }

    #[test]
    fn test_build_prompt_embeds_instruction_verbatim() {
        let prompt = build_prompt("Change the subject's activity to: makan bakso");
        assert!(prompt.contains(
            "instruction: \"Change the subject's activity to: makan bakso\""
        ));
        assert!(prompt.contains("Return ONLY the edited image."));
    }

    #[test]
    fn test_extract_image_rewraps_as_png() {
        // Inline data in the second part, declared as JPEG; the decoder
        // must still find it and force the PNG wrapper.
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here is your image"},
                        {"inlineData": {"mimeType": "image/jpeg", "data": "Zm9vYmFy"}}
                    ]
                }
            }]
        }"#;
        let response: EditResponse = serde_json::from_str(json).unwrap();

        let result = extract_image(response).unwrap();
        assert_eq!(result, "data:image/png;base64,Zm9vYmFy");
    }

    #[test]
    fn test_extract_image_only_inspects_first_candidate() {
        // Image data only in the second candidate; the strict
        // first-candidate policy means this is still "no image".
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "no image here"}]}},
                {"content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "Zm9vYmFy"}}
                ]}}
            ]
        }"#;
        let response: EditResponse = serde_json::from_str(json).unwrap();

        assert!(matches!(extract_image(response), Err(GeminiError::NoImage)));
    }

    #[test]
    fn test_extract_image_no_candidates() {
        let response: EditResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(extract_image(response), Err(GeminiError::NoImage)));
    }

    #[test]
    fn test_extract_image_empty_inline_data() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"mimeType": "image/png", "data": ""}}]
                }
            }]
        }"#;
        let response: EditResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(extract_image(response), Err(GeminiError::NoImage)));
    }

    #[test]
    fn test_no_image_error_message() {
        assert_eq!(
            GeminiError::NoImage.to_string(),
            "Tidak ada gambar yang dihasilkan oleh AI."
        );
    }
}
