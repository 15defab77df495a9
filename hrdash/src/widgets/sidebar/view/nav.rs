use iced::widget::{Column, Space, container, row, scrollable, text, tooltip};
use iced::{Border, Color, Element, Length};

use crate::components::primitive::nav_button::{
    NavButtonProps, NavButtonTone, view as nav_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{CHEVRON_DOWN, CHEVRON_UP, menu_icon};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::sidebar::event::SidebarIntent;
use crate::widgets::sidebar::model::{
    Chevron, NavRow, NavRowKind, SidebarViewModel, nav_rows,
};

const NAV_PADDING: f32 = 12.0;
const NAV_SPACING: f32 = 4.0;
const CHILD_INDENT: f32 = 24.0;
const CHILD_GUIDE_WIDTH: f32 = 2.0;
const CHILD_GUIDE_GAP: f32 = 8.0;
const TOOLTIP_GAP: f32 = 8.0;
const TOOLTIP_PADDING: f32 = 6.0;
const TOOLTIP_RADIUS: f32 = 6.0;

/// Props for the navigation list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the visible menu rows inside a scrollable column.
pub(crate) fn view<'a>(props: NavProps<'a>) -> Element<'a, SidebarIntent> {
    let rows = nav_rows(&props.vm).into_iter().map(|row| {
        nav_row(row, props.theme, props.fonts)
    });

    let list = Column::with_children(rows)
        .spacing(NAV_SPACING)
        .padding(NAV_PADDING)
        .width(Length::Fill);

    scrollable(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn nav_row<'a>(
    row: NavRow,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, SidebarIntent> {
    let intent = match row.kind {
        NavRowKind::Parent => SidebarIntent::ParentPressed(row.section),
        NavRowKind::Entry => SidebarIntent::EntryPressed(row.section),
        NavRowKind::Child => SidebarIntent::ChildPressed(row.section),
    };
    let trailing = row.chevron.map(|chevron| match chevron {
        Chevron::Up => CHEVRON_UP,
        Chevron::Down => CHEVRON_DOWN,
    });

    let button = nav_button_view(NavButtonProps {
        icon: menu_icon(row.icon),
        label: row.show_label.then_some(row.label),
        trailing,
        is_active: row.is_active,
        tone: NavButtonTone::Accent,
        theme,
        fonts,
    })
    .map(move |_| intent);

    if row.kind == NavRowKind::Child {
        return child_row(button, theme.theme.iced_palette().accent_border);
    }

    if row.show_label {
        return button;
    }

    with_tooltip(button, row.label, theme, fonts)
}

/// Indent a child row behind a thin vertical guide line.
fn child_row<'a>(
    button: Element<'a, SidebarIntent>,
    guide_color: Color,
) -> Element<'a, SidebarIntent> {
    let guide = container(Space::new())
        .width(Length::Fixed(CHILD_GUIDE_WIDTH))
        .height(Length::Fill)
        .style(move |_| child_guide_style(guide_color));

    row![
        Space::new().width(Length::Fixed(child_guide_offset())),
        guide,
        Space::new().width(Length::Fixed(CHILD_GUIDE_GAP)),
        button,
    ]
    .width(Length::Fill)
    .into()
}

const fn child_guide_offset() -> f32 {
    CHILD_INDENT - CHILD_GUIDE_WIDTH - CHILD_GUIDE_GAP
}

fn child_guide_style(color: Color) -> container::Style {
    container::Style {
        background: Some(color.into()),
        ..Default::default()
    }
}

/// Attach a right-side hover label to an icon-only row.
pub(super) fn with_tooltip<'a>(
    content: Element<'a, SidebarIntent>,
    label: &'a str,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, SidebarIntent> {
    let palette = theme.theme.iced_palette();
    let background = palette.foreground;
    let foreground = palette.surface;

    let tip = container(text(label).size(fonts.ui.size))
        .padding(TOOLTIP_PADDING)
        .style(move |_| container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: Border::default().rounded(TOOLTIP_RADIUS),
            ..Default::default()
        });

    tooltip(content, tip, tooltip::Position::Right)
        .gap(TOOLTIP_GAP)
        .into()
}

#[cfg(test)]
mod tests {
    use iced::Background;

    use super::{
        CHILD_GUIDE_GAP, CHILD_GUIDE_WIDTH, CHILD_INDENT, child_guide_offset,
        child_guide_style,
    };
    use crate::shared::ui::theme::AppTheme;

    #[test]
    fn given_child_indent_when_guide_is_placed_then_label_keeps_full_indent() {
        let offset = child_guide_offset();

        assert!(offset >= 0.0);
        assert_eq!(offset + CHILD_GUIDE_WIDTH + CHILD_GUIDE_GAP, CHILD_INDENT);
    }

    #[test]
    fn given_default_theme_when_guide_is_styled_then_accent_border_fills_it() {
        let theme = AppTheme::default();
        let accent_border = theme.iced_palette().accent_border;

        let style = child_guide_style(accent_border);

        assert_eq!(style.background, Some(Background::Color(accent_border)));
    }
}
