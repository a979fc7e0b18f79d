/// Ephemeral session state
///
/// The structs here are the view-model side of the app: which editor is
/// active, what image and instruction are currently held, and what the
/// result overlay is showing. All of it is reset on logout and on mode
/// switches; none of it survives the process.

use base64::Engine;

use crate::gemini;
use crate::input::SourceImage;

/// The two mutually exclusive editor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// "Ganti Aksi": swap what the subject is doing, via activity presets.
    #[default]
    ActionSwap,
    /// "Editor Ajaib": free-form visual edits.
    GeneralEdit,
}

/// Per-editor state, thrown away whenever the mode changes.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// The currently held upload, if any.
    pub source_image: Option<SourceImage>,
    /// Current instruction text, freely typed or preset-derived.
    pub instruction: String,
    /// Inline, user-correctable validation message.
    pub inline_error: Option<String>,
}

impl EditorState {
    /// Whether a submission is allowed: an image must be held and the
    /// instruction must be non-empty after trimming.
    pub fn can_submit(&self) -> bool {
        self.source_image.is_some() && !self.instruction.trim().is_empty()
    }

    /// Replaces the held image, keeping the instruction text.
    pub fn set_image(&mut self, image: SourceImage) {
        self.source_image = Some(image);
        self.inline_error = None;
    }

    /// Explicit clear action: drop the held image entirely.
    pub fn clear_image(&mut self) {
        self.source_image = None;
    }
}

/// The result overlay state machine: idle, loading, or showing a result.
///
/// There is deliberately no error state; failures alert outside the
/// overlay and drop it back to `Idle`.
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    /// Nothing shown; the studio is interactive.
    #[default]
    Idle,
    /// A request is in flight. The overlay replaces the studio view, so
    /// it cannot be dismissed and no second request can be started.
    Loading,
    /// The edited image, with dismiss and download actions.
    Ready(ResultImage),
}

impl Overlay {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A decoded result image ready for display and download.
#[derive(Debug, Clone)]
pub struct ResultImage {
    /// PNG bytes, written as-is on download.
    pub bytes: Vec<u8>,
    /// Handle for direct rendering.
    pub handle: iced::widget::image::Handle,
}

impl ResultImage {
    /// Decodes the service's `data:image/png;base64,...` string.
    ///
    /// Returns `None` if the payload is not valid base64, which the
    /// caller treats like any other failed edit.
    pub fn from_data_url(data_url: &str) -> Option<Self> {
        let parsed = gemini::parse_image(data_url);
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(parsed.data)
            .ok()?;

        Some(Self {
            handle: iced::widget::image::Handle::from_bytes(bytes.clone()),
            bytes,
        })
    }
}
