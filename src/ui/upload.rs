/// Upload panel widget
///
/// Shows either the held image with replace/clear actions, or a large
/// click target for the native picker. Drops are handled at the window
/// level, so this panel only needs to advertise them.

use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

use crate::input::SourceImage;
use crate::Message;

pub fn upload_panel<'a>(
    label: &'a str,
    source: Option<&'a SourceImage>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match source {
        Some(held) => column![
            image(held.handle.clone()).height(Length::Fixed(280.0)),
            row![
                button(text("Ganti Gambar").size(13))
                    .on_press(Message::PickImage)
                    .style(button::secondary)
                    .padding(6),
                button(text("Hapus Gambar").size(13))
                    .on_press(Message::ClearImage)
                    .style(button::danger)
                    .padding(6),
            ]
            .spacing(10),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into(),

        None => button(
            column![
                text("Klik untuk unggah").size(18),
                text("atau seret & lepas PNG, JPG").size(13),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .on_press(Message::PickImage)
        .style(button::text)
        .padding(48)
        .width(Length::Fill)
        .into(),
    };

    column![
        text(label).size(14),
        container(body)
            .width(Length::Fill)
            .padding(16)
            .style(container::bordered_box),
    ]
    .spacing(8)
    .into()
}
