use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    IconButtonProps, IconButtonVariant, view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::MENU;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::section::event::SectionIntent;
use crate::widgets::section::model::SectionViewModel;

const TOP_BAR_HEIGHT: f32 = 64.0;
const TOP_BAR_PADDING: f32 = 16.0;
const TOP_BAR_SPACING: f32 = 12.0;
const MENU_BUTTON_SIZE: f32 = 36.0;
const MENU_ICON_SIZE: f32 = 22.0;
const BODY_PADDING: f32 = 32.0;
const BODY_SPACING: f32 = 8.0;
const BREADCRUMB_SEPARATOR: &str = " / ";
const PLACEHOLDER: &str = "Select an item from the sidebar to navigate.";

/// Props for the active section page.
#[derive(Debug, Clone)]
pub(crate) struct PageProps<'a> {
    pub(crate) vm: SectionViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the top bar with breadcrumb and the section body.
pub(crate) fn view<'a>(props: PageProps<'a>) -> Element<'a, SectionIntent> {
    let palette = props.theme.theme.iced_palette();
    let surface = palette.surface;
    let background = palette.background;
    let muted = palette.muted_foreground;

    let mut top_bar = row![]
        .spacing(TOP_BAR_SPACING)
        .align_y(alignment::Vertical::Center);
    if props.vm.show_menu_button {
        top_bar = top_bar.push(
            icon_button_view(IconButtonProps {
                icon: MENU,
                theme: props.theme,
                size: MENU_BUTTON_SIZE,
                icon_size: MENU_ICON_SIZE,
                variant: IconButtonVariant::Accent,
            })
            .map(|_| SectionIntent::OpenSidebar),
        );
    }
    let trail = props.vm.breadcrumb.join(BREADCRUMB_SEPARATOR);
    top_bar = top_bar
        .push(
            text(trail)
                .size(props.fonts.ui.size)
                .style(move |_| text::Style { color: Some(muted) }),
        )
        .push(Space::new().width(Length::Fill));

    let top_bar = container(top_bar)
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .padding([0.0, TOP_BAR_PADDING])
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(surface.into()),
            ..Default::default()
        });

    let body = column![
        text(props.vm.title)
            .size(props.fonts.heading.size)
            .font(props.fonts.heading.font_type),
        text(PLACEHOLDER)
            .size(props.fonts.ui.size)
            .style(move |_| text::Style { color: Some(muted) }),
    ]
    .spacing(BODY_SPACING)
    .padding(BODY_PADDING);

    container(column![top_bar, body])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
