pub(crate) mod backdrop;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod nav;

use iced::widget::{column, container};
use iced::{Border, Element, Length};

use super::event::SidebarIntent;
use super::model::SidebarViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

/// Props for the sidebar view aggregator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the sidebar panel. The backdrop layer is composed by the app.
pub(crate) fn view(props: SidebarProps<'_>) -> Element<'_, SidebarIntent> {
    let palette = props.theme.theme.iced_palette();
    let surface = palette.surface;
    let border = palette.border;

    let header = header::view(header::HeaderProps {
        is_open: props.vm.is_open,
        is_narrow: props.vm.is_narrow,
        theme: props.theme,
        fonts: props.fonts,
    });
    let nav = nav::view(nav::NavProps {
        vm: props.vm,
        theme: props.theme,
        fonts: props.fonts,
    });
    let footer = footer::view(footer::FooterProps {
        is_open: props.vm.is_open,
        theme: props.theme,
        fonts: props.fonts,
    });

    container(column![header, nav, footer].height(Length::Fill))
        .width(Length::Fixed(props.vm.width()))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(surface.into()),
            border: Border {
                color: border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}
