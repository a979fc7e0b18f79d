/// The two editor bodies
///
/// Both follow the same skeleton (upload panel, presets, text field,
/// submit button) but deliberately share no state; switching tabs
/// rebuilds the editor from scratch.

use iced::widget::{button, column, text, text_input, Column, Row};
use iced::{Alignment, Element, Length};

use crate::state::presets::{ACTION_PRESETS, QUICK_PROMPTS};
use crate::state::session::EditorState;
use crate::ui::upload::upload_panel;
use crate::Message;

/// "Editor Ajaib": free-form edits with seven one-shot template phrases.
pub fn general_editor(editor: &EditorState) -> Element<'_, Message> {
    let mut prompt_rows: Column<'_, Message> = column![].spacing(8);
    for chunk in QUICK_PROMPTS.chunks(4) {
        let mut row: Row<'_, Message> = Row::new().spacing(8);
        for preset in chunk {
            row = row.push(
                button(text(preset.label).size(13))
                    .on_press(Message::UsePreset(preset.text))
                    .style(button::secondary)
                    .padding(6),
            );
        }
        prompt_rows = prompt_rows.push(row);
    }

    let counter = format!("{} karakter", editor.instruction.chars().count());

    let mut content = column![
        upload_panel("Unggah Gambar untuk Diedit", editor.source_image.as_ref()),
        text("Aksi Ajaib").size(14),
        prompt_rows,
        text_input(
            "Contoh: Ubah langit menjadi sore hari, tambahkan topi merah pada subjek...",
            &editor.instruction,
        )
        .on_input(Message::InstructionChanged)
        .on_submit(Message::SubmitEdit)
        .padding(12),
        text(counter).size(12),
    ]
    .spacing(16);

    if let Some(message) = &editor.inline_error {
        content = content.push(text(message.clone()).size(14));
    }

    content
        .push(submit_button("Mulai Edit", editor))
        .align_x(Alignment::Center)
        .into()
}

/// "Ganti Aksi": activity presets plus free-typed actions.
pub fn action_editor(editor: &EditorState) -> Element<'_, Message> {
    let mut action_rows: Column<'_, Message> = column![].spacing(8);
    for chunk in ACTION_PRESETS.chunks(3) {
        let mut row: Row<'_, Message> = Row::new().spacing(8);
        for preset in chunk {
            let selected = editor.instruction == preset.prompt;
            row = row.push(
                button(text(preset.label).size(14))
                    .on_press(Message::UsePreset(preset.prompt))
                    .style(if selected {
                        button::primary
                    } else {
                        button::secondary
                    })
                    .padding(10),
            );
        }
        action_rows = action_rows.push(row);
    }

    let mut content = column![
        upload_panel("Unggah Foto Anda", editor.source_image.as_ref()),
        text("Apa yang sedang dilakukan subjek?").size(14),
        action_rows,
        text_input(
            "Atau ketik aksi khusus... (misal: bermain gitar di bulan)",
            &editor.instruction,
        )
        .on_input(Message::InstructionChanged)
        .on_submit(Message::SubmitEdit)
        .padding(12),
    ]
    .spacing(16);

    if let Some(message) = &editor.inline_error {
        content = content.push(text(message.clone()).size(14));
    }

    content
        .push(submit_button("Terapkan Aksi", editor))
        .align_x(Alignment::Center)
        .into()
}

/// Submit button, disabled while the form is incomplete. The overlay
/// replaces the whole view during a request, so in-flight gating does
/// not need to happen here.
fn submit_button<'a>(label: &'a str, editor: &EditorState) -> Element<'a, Message> {
    button(text(label).size(16))
        .on_press_maybe(editor.can_submit().then_some(Message::SubmitEdit))
        .style(button::primary)
        .padding(12)
        .width(Length::Fixed(280.0))
        .into()
}
