use chrono::Utc;
use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod gemini;
mod input;
mod state;
mod ui;

use input::SourceImage;
use state::presets;
use state::session::{AppMode, EditorState, Overlay, ResultImage};

/// Hardcoded demo passphrase. This is a client-side gate only, not a
/// security boundary.
const PASSPHRASE: &str = "1234";

/// Main application state
struct ArtFlowStudio {
    /// Whether the login gate has been passed this session
    authenticated: bool,
    /// Current contents of the passphrase field
    passphrase_input: String,
    /// Wrong-passphrase flag, cleared on the next keystroke
    login_error: bool,
    /// Active editor variant
    mode: AppMode,
    /// State of the active editor (reset on mode switch)
    editor: EditorState,
    /// Result overlay state machine
    overlay: Overlay,
    /// Animation frame for the loading spinner
    spinner_frame: usize,
    /// Client for the Gemini edit endpoint
    gemini: gemini::GeminiClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Passphrase field edited
    PassphraseChanged(String),
    /// Passphrase submitted (button or Enter)
    SubmitPassphrase,
    /// "Kunci Sesi": back to the login screen
    LockSession,
    /// Editor tab clicked
    SwitchMode(AppMode),
    /// Open the native image picker
    PickImage,
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Background image load finished (None = silently rejected)
    ImageLoaded(Option<SourceImage>),
    /// Explicit clear of the held image
    ClearImage,
    /// Instruction text edited
    InstructionChanged(String),
    /// A preset chosen; overwrites the instruction entirely
    UsePreset(&'static str),
    /// Submit the edit request
    SubmitEdit,
    /// The edit request resolved (data URL or error text)
    EditFinished(Result<String, String>),
    /// Loading spinner animation tick
    Tick,
    /// Dismiss the result overlay
    CloseResult,
    /// Save the result image to disk
    DownloadResult,
}

impl ArtFlowStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🎨 ArtFlow AI Studio initialized");

        (
            ArtFlowStudio {
                authenticated: false,
                passphrase_input: String::new(),
                login_error: false,
                mode: AppMode::default(),
                editor: EditorState::default(),
                overlay: Overlay::default(),
                spinner_frame: 0,
                gemini: gemini::GeminiClient::from_env(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PassphraseChanged(value) => {
                self.passphrase_input = value;
                self.login_error = false;
                Task::none()
            }
            Message::SubmitPassphrase => {
                if self.passphrase_input == PASSPHRASE {
                    self.authenticated = true;
                    self.login_error = false;
                    self.passphrase_input.clear();
                    println!("🔓 Studio unlocked");
                } else {
                    self.login_error = true;
                    self.passphrase_input.clear();
                }
                Task::none()
            }
            Message::LockSession => {
                self.authenticated = false;
                self.passphrase_input.clear();
                self.login_error = false;
                self.mode = AppMode::default();
                self.editor = EditorState::default();
                self.overlay = Overlay::Idle;
                println!("🔒 Session locked");
                Task::none()
            }
            Message::SwitchMode(mode) => {
                if self.mode != mode {
                    self.mode = mode;
                    // No state survives a mode switch
                    self.editor = EditorState::default();
                }
                Task::none()
            }
            Message::PickImage => {
                // Native picker, same pattern as any other file dialog here:
                // synchronous call from the update loop
                let file = FileDialog::new()
                    .set_title("Pilih Gambar")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .pick_file();

                match file {
                    Some(path) => {
                        Task::perform(input::load_image_file(path), Message::ImageLoaded)
                    }
                    None => Task::none(),
                }
            }
            Message::FileDropped(path) => {
                // Drops only count while the studio itself is visible
                if !self.authenticated || self.overlay.is_loading() {
                    return Task::none();
                }
                Task::perform(input::load_image_file(path), Message::ImageLoaded)
            }
            Message::ImageLoaded(Some(image)) => {
                self.editor.set_image(image);
                Task::none()
            }
            // Non-image or unreadable file: silent no-op
            Message::ImageLoaded(None) => Task::none(),
            Message::ClearImage => {
                self.editor.clear_image();
                Task::none()
            }
            Message::InstructionChanged(value) => {
                self.editor.instruction = value;
                self.editor.inline_error = None;
                Task::none()
            }
            Message::UsePreset(preset_text) => {
                self.editor.instruction = preset_text.to_string();
                self.editor.inline_error = None;
                Task::none()
            }
            Message::SubmitEdit => {
                // Single-flight: one request at a time
                if self.overlay.is_loading() {
                    return Task::none();
                }
                if !self.editor.can_submit() {
                    self.editor.inline_error = Some(self.missing_input_message().to_string());
                    return Task::none();
                }
                let Some(source_image) = self
                    .editor
                    .source_image
                    .as_ref()
                    .map(|source| source.data_url.clone())
                else {
                    return Task::none();
                };

                let instruction = match self.mode {
                    AppMode::ActionSwap => presets::wrap_action(&self.editor.instruction),
                    AppMode::GeneralEdit => self.editor.instruction.clone(),
                };

                self.editor.inline_error = None;
                self.overlay = Overlay::Loading;
                println!("⚡ Sending edit request...");

                let client = self.gemini.clone();
                Task::perform(
                    async move {
                        client
                            .edit_image(&source_image, &instruction)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::EditFinished,
                )
            }
            Message::EditFinished(result) => {
                match result {
                    Ok(data_url) => match ResultImage::from_data_url(&data_url) {
                        Some(image) => {
                            println!("✅ Edit complete");
                            self.overlay = Overlay::Ready(image);
                        }
                        None => {
                            eprintln!("⚠️  Result payload was not valid base64");
                            self.overlay = Overlay::Idle;
                            self.alert_edit_failure();
                        }
                    },
                    Err(e) => {
                        eprintln!("⚠️  Edit request failed: {e}");
                        self.overlay = Overlay::Idle;
                        self.alert_edit_failure();
                    }
                }
                Task::none()
            }
            Message::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                Task::none()
            }
            Message::CloseResult => {
                self.overlay = Overlay::Idle;
                Task::none()
            }
            Message::DownloadResult => {
                if let Overlay::Ready(result) = &self.overlay {
                    let filename =
                        format!("artflow-hasil-{}.png", Utc::now().timestamp_millis());

                    let target = FileDialog::new()
                        .set_title("Simpan Hasil")
                        .set_file_name(&filename)
                        .add_filter("PNG Image", &["png"])
                        .save_file();

                    if let Some(path) = target {
                        match std::fs::write(&path, &result.bytes) {
                            Ok(()) => println!("💾 Saved result to {}", path.display()),
                            Err(e) => {
                                eprintln!("⚠️  Failed to save {}: {}", path.display(), e)
                            }
                        }
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        if !self.authenticated {
            return self.login_view();
        }

        match &self.overlay {
            Overlay::Loading => ui::overlay::loading_view(self.spinner_frame),
            Overlay::Ready(result) => ui::overlay::result_view(result),
            Overlay::Idle => self.studio_view(),
        }
    }

    /// Window-level events, plus the spinner tick while a request is in
    /// flight
    fn subscription(&self) -> Subscription<Message> {
        let drops = iced::event::listen_with(handle_window_event);

        if self.overlay.is_loading() {
            let ticks = iced::time::every(std::time::Duration::from_millis(120))
                .map(|_| Message::Tick);
            Subscription::batch([drops, ticks])
        } else {
            drops
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The login gate shown before anything else
    fn login_view(&self) -> Element<Message> {
        let mut fields = column![
            text("ArtFlow AI Studio").size(40),
            text("AKSES KEAMANAN DIPERLUKAN").size(13),
            text_input("Masukkan kode akses...", &self.passphrase_input)
                .secure(true)
                .on_input(Message::PassphraseChanged)
                .on_submit(Message::SubmitPassphrase)
                .padding(12)
                .width(Length::Fixed(320.0)),
        ]
        .spacing(18)
        .align_x(Alignment::Center);

        if self.login_error {
            fields = fields.push(text("Error: Kata sandi salah. (Hint: 1234)").size(14));
        }

        fields = fields.push(
            button(text("Buka Studio").size(16))
                .on_press(Message::SubmitPassphrase)
                .style(button::primary)
                .padding(12),
        );

        container(fields)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Header, mode tabs, and the active editor body
    fn studio_view(&self) -> Element<Message> {
        let header = row![
            column![
                text("ArtFlow AI").size(28),
                text("STUDIO EDITION").size(11),
            ]
            .spacing(2),
            horizontal_space(),
            button(text("Kunci Sesi").size(13))
                .on_press(Message::LockSession)
                .style(button::secondary)
                .padding(6),
        ]
        .align_y(Alignment::Center);

        let tabs = row![
            mode_tab("▶  Ganti Aksi", AppMode::ActionSwap, self.mode),
            mode_tab("✨  Editor Ajaib", AppMode::GeneralEdit, self.mode),
        ]
        .spacing(8)
        .width(Length::Fill);

        let (heading, blurb) = match self.mode {
            AppMode::ActionSwap => (
                "Ubah Aktivitas Subjek",
                "Unggah foto dan beri tahu AI apa yang seharusnya dilakukan oleh orang dalam foto tersebut.",
            ),
            AppMode::GeneralEdit => (
                "Editor Ajaib",
                "Jelaskan perubahan visual apa pun yang Anda inginkan, dan AI akan mewujudkannya.",
            ),
        };

        let body = match self.mode {
            AppMode::ActionSwap => ui::editors::action_editor(&self.editor),
            AppMode::GeneralEdit => ui::editors::general_editor(&self.editor),
        };

        let content = column![
            header,
            tabs,
            column![text(heading).size(24), text(blurb).size(14)]
                .spacing(4)
                .align_x(Alignment::Center),
            body,
        ]
        .spacing(24)
        .padding(32)
        .width(Length::Fixed(820.0));

        container(iced::widget::scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// The inline validation message for an incomplete form
    fn missing_input_message(&self) -> &'static str {
        match self.mode {
            AppMode::ActionSwap => "Harap unggah foto dan tentukan aksi yang diinginkan.",
            AppMode::GeneralEdit => "Harap unggah gambar dan berikan instruksi.",
        }
    }

    /// One generic blocking alert for every kind of request failure
    fn alert_edit_failure(&self) {
        let description = match self.mode {
            AppMode::ActionSwap => "Gagal memproses gambar. Silakan coba lagi.",
            AppMode::GeneralEdit => "Gagal mengedit gambar. Silakan coba lagi.",
        };

        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("ArtFlow AI Studio")
            .set_description(description)
            .show();
    }
}

/// A single mode tab button
fn mode_tab(label: &str, mode: AppMode, active: AppMode) -> Element<'_, Message> {
    button(text(label).size(15))
        .on_press(Message::SwitchMode(mode))
        .style(if mode == active {
            button::primary
        } else {
            button::text
        })
        .padding(12)
        .width(Length::Fill)
        .into()
}

fn handle_window_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application(
        "ArtFlow AI Studio",
        ArtFlowStudio::update,
        ArtFlowStudio::view,
    )
    .theme(ArtFlowStudio::theme)
    .subscription(ArtFlowStudio::subscription)
    .centered()
    .run_with(ArtFlowStudio::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::loader::encode_image;

    fn app() -> ArtFlowStudio {
        let (app, _) = ArtFlowStudio::new();
        app
    }

    fn png_image() -> SourceImage {
        let png_magic = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        encode_image(png_magic).unwrap()
    }

    #[test]
    fn test_correct_passphrase_unlocks() {
        let mut app = app();
        let _ = app.update(Message::PassphraseChanged("1234".to_string()));
        let _ = app.update(Message::SubmitPassphrase);

        assert!(app.authenticated);
        assert!(!app.login_error);
        assert!(app.passphrase_input.is_empty());
    }

    #[test]
    fn test_wrong_passphrase_shows_error_and_clears_field() {
        let mut app = app();
        let _ = app.update(Message::PassphraseChanged("hunter2".to_string()));
        let _ = app.update(Message::SubmitPassphrase);

        assert!(!app.authenticated);
        assert!(app.login_error);
        assert!(app.passphrase_input.is_empty());

        // The error clears on the next keystroke
        let _ = app.update(Message::PassphraseChanged("1".to_string()));
        assert!(!app.login_error);
    }

    #[test]
    fn test_lock_session_resets_everything() {
        let mut app = app();
        let _ = app.update(Message::PassphraseChanged("1234".to_string()));
        let _ = app.update(Message::SubmitPassphrase);
        let _ = app.update(Message::SwitchMode(AppMode::GeneralEdit));
        let _ = app.update(Message::InstructionChanged("make it rain".to_string()));

        let _ = app.update(Message::LockSession);

        assert!(!app.authenticated);
        assert_eq!(app.mode, AppMode::default());
        assert!(app.editor.instruction.is_empty());
        assert!(matches!(app.overlay, Overlay::Idle));
    }

    #[test]
    fn test_mode_switch_discards_editor_state() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded(Some(png_image())));
        let _ = app.update(Message::InstructionChanged("cyberpunk it".to_string()));

        let _ = app.update(Message::SwitchMode(AppMode::GeneralEdit));

        assert!(app.editor.source_image.is_none());
        assert!(app.editor.instruction.is_empty());

        // Re-selecting the active mode is a no-op, not a reset
        let _ = app.update(Message::InstructionChanged("keep me".to_string()));
        let _ = app.update(Message::SwitchMode(AppMode::GeneralEdit));
        assert_eq!(app.editor.instruction, "keep me");
    }

    #[test]
    fn test_submit_without_image_is_blocked() {
        let mut app = app();
        let _ = app.update(Message::InstructionChanged("remove background".to_string()));

        let _ = app.update(Message::SubmitEdit);

        // No request was started and the user sees an inline message
        assert!(!app.overlay.is_loading());
        assert!(app.editor.inline_error.is_some());
    }

    #[test]
    fn test_submit_with_blank_instruction_is_blocked() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded(Some(png_image())));
        let _ = app.update(Message::InstructionChanged("   ".to_string()));

        let _ = app.update(Message::SubmitEdit);

        assert!(!app.overlay.is_loading());
        assert!(app.editor.inline_error.is_some());
    }

    #[test]
    fn test_submit_with_valid_form_starts_request() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded(Some(png_image())));
        let _ = app.update(Message::UsePreset("Make the person eating a delicious meal"));

        let _ = app.update(Message::SubmitEdit);

        assert!(app.overlay.is_loading());
        assert!(app.editor.inline_error.is_none());
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded(Some(png_image())));
        let _ = app.update(Message::InstructionChanged("sketch it".to_string()));
        let _ = app.update(Message::SubmitEdit);
        assert!(app.overlay.is_loading());

        // Still loading; the second submit must not disturb anything
        let _ = app.update(Message::SubmitEdit);
        assert!(app.overlay.is_loading());
    }

    #[test]
    fn test_rejected_file_leaves_image_unchanged() {
        let mut app = app();
        let _ = app.update(Message::ImageLoaded(Some(png_image())));
        let before = app.editor.source_image.as_ref().unwrap().data_url.clone();

        // A non-image load resolves to None and must be a silent no-op
        let _ = app.update(Message::ImageLoaded(None));

        assert_eq!(
            app.editor.source_image.as_ref().unwrap().data_url,
            before
        );
    }

    #[test]
    fn test_successful_result_opens_overlay() {
        let mut app = app();
        let _ = app.update(Message::EditFinished(Ok(
            "data:image/png;base64,Zm9vYmFy".to_string()
        )));

        match &app.overlay {
            Overlay::Ready(result) => assert_eq!(result.bytes, b"foobar"),
            other => panic!("expected Ready overlay, got {other:?}"),
        }

        let _ = app.update(Message::CloseResult);
        assert!(matches!(app.overlay, Overlay::Idle));
    }

    #[test]
    fn test_preset_overwrites_instruction() {
        let mut app = app();
        let _ = app.update(Message::InstructionChanged("half-typed tho".to_string()));
        let _ = app.update(Message::UsePreset(
            "Turn this image into a detailed pencil sketch.",
        ));

        assert_eq!(
            app.editor.instruction,
            "Turn this image into a detailed pencil sketch."
        );
    }
}
