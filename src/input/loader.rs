/// Image file loader
///
/// Reads a user-selected or dropped file into memory and encodes it as a
/// `data:<mime>;base64,<payload>` string. The format is sniffed from the
/// file's magic bytes, never from its extension, so a renamed text file
/// still gets rejected. Rejection is silent by design: a non-image file
/// simply leaves the held image unchanged.

use base64::Engine;
use std::path::PathBuf;

/// An uploaded image held in memory for the session.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Self-describing `data:<mime>;base64,<payload>` string, consumed by
    /// the edit request service.
    pub data_url: String,
    /// Decoded handle for direct rendering in the UI.
    pub handle: iced::widget::image::Handle,
}

/// Loads and encodes an image file.
///
/// Returns `None` for unreadable files and for anything whose bytes do
/// not sniff as a known image format. No error is surfaced either way.
pub async fn load_image_file(path: PathBuf) -> Option<SourceImage> {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("⚠️  Could not read {}: {}", path.display(), e);
            return None;
        }
    };

    let source = encode_image(bytes);
    if source.is_some() {
        println!("🖼️  Loaded image: {}", path.display());
    }
    source
}

/// Encodes raw file bytes as a data URL, rejecting non-image content.
pub fn encode_image(bytes: Vec<u8>) -> Option<SourceImage> {
    let format = image::guess_format(&bytes).ok()?;
    let mime_type = format.to_mime_type();

    let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);
    let data_url = format!("data:{mime_type};base64,{payload}");

    Some(SourceImage {
        data_url,
        handle: iced::widget::image::Handle::from_bytes(bytes),
    })
}
