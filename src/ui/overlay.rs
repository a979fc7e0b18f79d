/// Result overlay views
///
/// These replace the studio view entirely, which is what makes the
/// loading state blocking: there is simply nothing else to click.

use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, Element, Length};

use crate::state::session::ResultImage;
use crate::Message;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Indeterminate progress view. Offers no dismiss action.
pub fn loading_view<'a>(frame: usize) -> Element<'a, Message> {
    let spinner = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];

    let content = column![
        text(spinner).size(48),
        text("⚡ Sedang Memproses...").size(28),
        text("AI sedang berimajinasi...").size(18),
        text("Mohon tunggu sebentar").size(13),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Finished result with dismiss and download actions.
pub fn result_view(result: &ResultImage) -> Element<'_, Message> {
    let header = row![
        text("Hasil Ajaib").size(26),
        horizontal_space(),
        button(text("✕").size(18))
            .on_press(Message::CloseResult)
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let footer = row![
        horizontal_space(),
        button(text("Edit Lainnya").size(15))
            .on_press(Message::CloseResult)
            .style(button::secondary)
            .padding(10),
        button(text("Unduh Gambar").size(15))
            .on_press(Message::DownloadResult)
            .style(button::primary)
            .padding(10),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let content = column![
        header,
        container(image(result.handle.clone()))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        footer,
    ]
    .spacing(16)
    .padding(24);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
