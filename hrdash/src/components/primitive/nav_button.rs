use iced::widget::{Space, button, container, row, svg, text};
use iced::{Border, Color, Element, Length, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const NAV_BUTTON_HEIGHT: f32 = 40.0;
const NAV_BUTTON_RADIUS: f32 = 8.0;
const NAV_BUTTON_PADDING_X: f32 = 12.0;
const NAV_BUTTON_SPACING: f32 = 12.0;
const NAV_ICON_SIZE: f32 = 20.0;
const NAV_TRAILING_ICON_SIZE: f32 = 16.0;

/// UI events emitted by a navigation button.
#[derive(Debug, Clone)]
pub(crate) enum NavButtonEvent {
    Pressed,
}

/// Hover tint of a navigation button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavButtonTone {
    Accent,
    Success,
    Danger,
}

/// Props for rendering a full-width navigation button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    /// `None` renders an icon-only button centered in the rail.
    pub(crate) label: Option<&'a str>,
    pub(crate) trailing: Option<&'static [u8]>,
    pub(crate) is_active: bool,
    pub(crate) tone: NavButtonTone,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct NavButtonColors {
    background: Option<Color>,
    foreground: Color,
    border: Color,
}

/// Render a navigation row with an icon, optional label and trailing icon.
pub(crate) fn view<'a>(
    props: NavButtonProps<'a>,
) -> Element<'a, NavButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let idle = resolve_colors(props.tone, props.is_active, false, palette);
    let hovered = resolve_colors(props.tone, props.is_active, true, palette);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(NAV_ICON_SIZE))
        .height(Length::Fixed(NAV_ICON_SIZE))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hovered.foreground
            } else {
                idle.foreground
            };
            svg::Style { color: Some(color) }
        });

    let content: Element<'a, NavButtonEvent> = match props.label {
        Some(label) => {
            let font = if props.is_active {
                props.fonts.ui_emphasis()
            } else {
                props.fonts.ui.font_type
            };
            let mut content = row![
                icon,
                text(label).size(props.fonts.ui.size).font(font),
                Space::new().width(Length::Fill),
            ]
            .spacing(NAV_BUTTON_SPACING)
            .align_y(alignment::Vertical::Center);

            if let Some(trailing) = props.trailing {
                let trailing_color = idle.foreground;
                content = content.push(
                    svg::Svg::new(svg::Handle::from_memory(trailing))
                        .width(Length::Fixed(NAV_TRAILING_ICON_SIZE))
                        .height(Length::Fixed(NAV_TRAILING_ICON_SIZE))
                        .style(move |_, _| svg::Style {
                            color: Some(trailing_color),
                        }),
                );
            }

            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([0.0, NAV_BUTTON_PADDING_X])
                .align_y(alignment::Vertical::Center)
                .into()
        },
        None => container(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    button(content)
        .on_press(NavButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_BUTTON_HEIGHT))
        .style(move |_, status| {
            let colors = match status {
                button::Status::Hovered | button::Status::Pressed => hovered,
                _ => idle,
            };
            button::Style {
                background: colors.background.map(Into::into),
                text_color: colors.foreground,
                border: Border {
                    color: colors.border,
                    width: 1.0,
                    radius: NAV_BUTTON_RADIUS.into(),
                },
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_colors(
    tone: NavButtonTone,
    is_active: bool,
    is_hovered: bool,
    palette: &IcedColorPalette,
) -> NavButtonColors {
    if is_active {
        return NavButtonColors {
            background: Some(palette.accent_soft),
            foreground: palette.accent_strong,
            border: palette.accent_border,
        };
    }

    if !is_hovered {
        return NavButtonColors {
            background: None,
            foreground: palette.muted_foreground,
            border: Color::TRANSPARENT,
        };
    }

    let (background, foreground) = match tone {
        NavButtonTone::Accent => (palette.background, palette.foreground),
        NavButtonTone::Success => (palette.success_soft, palette.success),
        NavButtonTone::Danger => (palette.danger_soft, palette.danger),
    };

    NavButtonColors {
        background: Some(background),
        foreground,
        border: Color::TRANSPARENT,
    }
}

#[cfg(test)]
mod tests {
    use super::{NavButtonTone, resolve_colors};
    use crate::shared::ui::theme::{ColorPalette, IcedColorPalette};

    fn palette() -> IcedColorPalette {
        IcedColorPalette::from(&ColorPalette::default())
    }

    #[test]
    fn given_active_row_when_resolving_then_accent_colors_ignore_hover() {
        let palette = palette();

        let idle = resolve_colors(NavButtonTone::Danger, true, false, &palette);
        let hovered =
            resolve_colors(NavButtonTone::Danger, true, true, &palette);

        assert_eq!(idle, hovered);
        assert_eq!(idle.background, Some(palette.accent_soft));
        assert_eq!(idle.foreground, palette.accent_strong);
        assert_eq!(idle.border, palette.accent_border);
    }

    #[test]
    fn given_inactive_row_when_idle_then_it_has_no_background() {
        let palette = palette();

        let colors =
            resolve_colors(NavButtonTone::Accent, false, false, &palette);

        assert_eq!(colors.background, None);
        assert_eq!(colors.foreground, palette.muted_foreground);
    }

    #[test]
    fn given_footer_tones_when_hovered_then_success_and_danger_tints_apply() {
        let palette = palette();

        let help =
            resolve_colors(NavButtonTone::Success, false, true, &palette);
        let logout =
            resolve_colors(NavButtonTone::Danger, false, true, &palette);

        assert_eq!(help.background, Some(palette.success_soft));
        assert_eq!(help.foreground, palette.success);
        assert_eq!(logout.background, Some(palette.danger_soft));
        assert_eq!(logout.foreground, palette.danger);
    }
}
