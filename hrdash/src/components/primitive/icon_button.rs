use iced::widget::{button, container, svg};
use iced::{Border, Color, Element, Length, alignment};

use crate::shared::ui::theme::ThemeProps;

const ICON_BUTTON_RADIUS: f32 = 8.0;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonVariant {
    Standard,
    Accent,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: IconButtonVariant,
}

/// Render a square icon-only button with a soft hover background.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_variant_colors(
        props.variant,
        palette.muted_foreground,
        palette.accent,
    );
    let hover_background = palette.accent_soft;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(hover_background.into())
                },
                _ => None,
            };

            button::Style {
                background,
                border: Border::default().rounded(ICON_BUTTON_RADIUS),
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    default_base: Color,
    accent: Color,
) -> (Color, Color) {
    match variant {
        IconButtonVariant::Standard => (default_base, accent),
        IconButtonVariant::Accent => (accent, accent),
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{IconButtonVariant, resolve_variant_colors};

    #[test]
    fn given_standard_variant_when_resolving_then_hover_uses_accent() {
        let default_base = Color::from_rgb(0.1, 0.2, 0.3);
        let accent = Color::from_rgb(0.4, 0.5, 0.6);

        let (base, hover) = resolve_variant_colors(
            IconButtonVariant::Standard,
            default_base,
            accent,
        );

        assert_eq!(base, default_base);
        assert_eq!(hover, accent);
    }

    #[test]
    fn given_accent_variant_when_resolving_then_both_states_use_accent() {
        let default_base = Color::from_rgb(0.1, 0.2, 0.3);
        let accent = Color::from_rgb(0.4, 0.5, 0.6);

        let (base, hover) = resolve_variant_colors(
            IconButtonVariant::Accent,
            default_base,
            accent,
        );

        assert_eq!(base, accent);
        assert_eq!(hover, accent);
    }
}
