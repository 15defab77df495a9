use iced::widget::{Space, column, container, image, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    IconButtonProps, IconButtonVariant, view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{CHEVRON_LEFT, CHEVRON_RIGHT, LOGO, X};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::sidebar::event::SidebarIntent;

const BRAND_TITLE: &str = "HR Dashboard";
const BRAND_SUBTITLE: &str = "Management System";

const LOGO_OPEN_SIZE: f32 = 48.0;
const LOGO_COLLAPSED_SIZE: f32 = 40.0;
const HEADER_PADDING: f32 = 16.0;
const HEADER_SPACING: f32 = 12.0;
const CONTROL_BUTTON_SIZE: f32 = 32.0;
const CONTROL_ICON_SIZE: f32 = 18.0;
const BRAND_TITLE_SCALE: f32 = 0.9;
const SUBTITLE_SCALE: f32 = 0.85;

/// Props for the sidebar brand header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) is_narrow: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the logo block with the collapse toggle or the close button.
pub(crate) fn view<'a>(props: HeaderProps<'a>) -> Element<'a, SidebarIntent> {
    let palette = props.theme.theme.iced_palette();
    let header_tint = palette.header_tint;
    let muted = palette.muted_foreground;

    let logo_size = if props.is_open {
        LOGO_OPEN_SIZE
    } else {
        LOGO_COLLAPSED_SIZE
    };
    let logo = image(image::Handle::from_bytes(LOGO))
        .width(Length::Fixed(logo_size))
        .height(Length::Fixed(logo_size));

    let control = control_button(props);

    let content: Element<'a, SidebarIntent> = if props.is_open {
        let titles = column![
            text(BRAND_TITLE)
                .size(props.fonts.heading.size * BRAND_TITLE_SCALE)
                .font(props.fonts.heading.font_type),
            text(BRAND_SUBTITLE)
                .size(props.fonts.ui.size * SUBTITLE_SCALE)
                .style(move |_| text::Style { color: Some(muted) }),
        ];

        row![logo, titles, Space::new().width(Length::Fill), control]
            .spacing(HEADER_SPACING)
            .align_y(alignment::Vertical::Center)
            .into()
    } else {
        column![logo, control]
            .spacing(HEADER_SPACING)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    };

    container(content)
        .width(Length::Fill)
        .padding(HEADER_PADDING)
        .style(move |_| container::Style {
            background: Some(header_tint.into()),
            ..Default::default()
        })
        .into()
}

fn control_button<'a>(props: HeaderProps<'a>) -> Element<'a, SidebarIntent> {
    let (icon, intent) = if props.is_narrow {
        (X, SidebarIntent::ClosePressed)
    } else if props.is_open {
        (CHEVRON_LEFT, SidebarIntent::ToggleOpen)
    } else {
        (CHEVRON_RIGHT, SidebarIntent::ToggleOpen)
    };

    icon_button_view(IconButtonProps {
        icon,
        theme: props.theme,
        size: CONTROL_BUTTON_SIZE,
        icon_size: CONTROL_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(move |_| intent)
}
