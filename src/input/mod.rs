/// Image input handling
///
/// Turns files from the native picker or a window drop into the
/// data-URL representation the rest of the app works with.

pub mod loader;

pub use loader::{load_image_file, SourceImage};
