use iced::widget::{Space, column, container};
use iced::{Element, Length};

use super::nav::with_tooltip;
use crate::components::primitive::nav_button::{
    NavButtonProps, NavButtonTone, view as nav_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{HELP_CIRCLE, LOG_OUT};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::sidebar::event::SidebarIntent;

const HELP_LABEL: &str = "Help & Support";
const LOGOUT_LABEL: &str = "Logout";
const FOOTER_PADDING: f32 = 12.0;
const FOOTER_SPACING: f32 = 4.0;
const DIVIDER_HEIGHT: f32 = 1.0;

/// Props for the footer action list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FooterProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the help and logout actions pinned to the sidebar bottom.
pub(crate) fn view<'a>(props: FooterProps<'a>) -> Element<'a, SidebarIntent> {
    let help = action(
        props,
        HELP_CIRCLE,
        HELP_LABEL,
        NavButtonTone::Success,
        SidebarIntent::HelpPressed,
    );
    let logout = action(
        props,
        LOG_OUT,
        LOGOUT_LABEL,
        NavButtonTone::Danger,
        SidebarIntent::LogoutPressed,
    );

    let actions = container(column![help, logout].spacing(FOOTER_SPACING))
        .padding(FOOTER_PADDING)
        .width(Length::Fill);

    let border = props.theme.theme.iced_palette().border;
    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(DIVIDER_HEIGHT))
        .style(move |_| container::Style {
            background: Some(border.into()),
            ..Default::default()
        });

    column![divider, actions].into()
}

fn action<'a>(
    props: FooterProps<'a>,
    icon: &'static [u8],
    label: &'static str,
    tone: NavButtonTone,
    intent: SidebarIntent,
) -> Element<'a, SidebarIntent> {
    let button = nav_button_view(NavButtonProps {
        icon,
        label: props.is_open.then_some(label),
        trailing: None,
        is_active: false,
        tone,
        theme: props.theme,
        fonts: props.fonts,
    })
    .map(move |_| intent);

    if props.is_open {
        button
    } else {
        with_tooltip(button, label, props.theme, props.fonts)
    }
}
