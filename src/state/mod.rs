/// State management module
///
/// This module holds all ephemeral session state:
/// - Editor mode, held image, instruction text, overlay state (session.rs)
/// - The fixed prompt/action preset catalogs (presets.rs)
///
/// Nothing here is persisted; everything lives and dies with the window.

pub mod presets;
pub mod session;
