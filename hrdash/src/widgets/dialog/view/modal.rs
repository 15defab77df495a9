use iced::widget::{
    Space, button, center, column, container, opaque, row, text,
};
use iced::{Border, Color, Element, Length, Shadow, Vector, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{BACKDROP_ALPHA, IcedColorPalette, ThemeProps};
use crate::widgets::dialog::event::DialogIntent;
use crate::widgets::dialog::model::{DialogButtons, DialogViewModel};

const CARD_WIDTH: f32 = 400.0;
const CARD_PADDING: f32 = 24.0;
const CARD_SPACING: f32 = 16.0;
const CARD_RADIUS: f32 = 12.0;
const BUTTON_SPACING: f32 = 8.0;
const BUTTON_PADDING: [f32; 2] = [8.0, 16.0];
const BUTTON_RADIUS: f32 = 8.0;

/// Props for the modal prompt overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModalProps<'a> {
    pub(crate) vm: DialogViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a centered prompt card over a dimmed, input-blocking layer.
pub(crate) fn view<'a>(props: ModalProps<'a>) -> Element<'a, DialogIntent> {
    let palette = props.theme.theme.iced_palette();
    let surface = palette.surface;
    let border = palette.border;
    let dim = palette.backdrop.scale_alpha(BACKDROP_ALPHA);

    let title = text(props.vm.title)
        .size(props.fonts.heading.size)
        .font(props.fonts.heading.font_type);
    let message = text(props.vm.message).size(props.fonts.ui.size);

    let buttons: Element<'a, DialogIntent> = match props.vm.buttons {
        DialogButtons::Acknowledge => row![
            Space::new().width(Length::Fill),
            action_button("OK", DialogIntent::Acknowledge, true, palette),
        ]
        .into(),
        DialogButtons::ConfirmCancel => row![
            Space::new().width(Length::Fill),
            action_button("Cancel", DialogIntent::Cancel, false, palette),
            action_button("Confirm", DialogIntent::Confirm, true, palette),
        ]
        .spacing(BUTTON_SPACING)
        .into(),
    };

    let card = container(
        column![title, message, buttons]
            .spacing(CARD_SPACING)
            .align_x(alignment::Horizontal::Left),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .padding(CARD_PADDING)
    .style(move |_| container::Style {
        background: Some(surface.into()),
        border: Border {
            color: border,
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color::BLACK.scale_alpha(0.2),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    });

    let layer = center(card).style(move |_| container::Style {
        background: Some(dim.into()),
        ..Default::default()
    });

    opaque(layer)
}

fn action_button<'a>(
    label: &'a str,
    intent: DialogIntent,
    is_primary: bool,
    palette: &IcedColorPalette,
) -> Element<'a, DialogIntent> {
    let (background, hovered, foreground) = if is_primary {
        (palette.accent, palette.accent_strong, palette.surface)
    } else {
        (palette.background, palette.border, palette.foreground)
    };

    button(text(label))
        .on_press(intent)
        .padding(BUTTON_PADDING)
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => hovered,
                _ => background,
            };

            button::Style {
                background: Some(background.into()),
                text_color: foreground,
                border: Border::default().rounded(BUTTON_RADIUS),
                ..button::Style::default()
            }
        })
        .into()
}
