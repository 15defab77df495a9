use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length};

use crate::shared::ui::theme::{BACKDROP_ALPHA, ThemeProps};
use crate::widgets::sidebar::event::SidebarIntent;

/// Props for the dimmed layer behind the floating sidebar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackdropProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a full-screen dimmed layer that closes the sidebar on press.
pub(crate) fn view<'a>(props: BackdropProps<'a>) -> Element<'a, SidebarIntent> {
    let color = props
        .theme
        .theme
        .iced_palette()
        .backdrop
        .scale_alpha(BACKDROP_ALPHA);

    let layer = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..Default::default()
        });

    mouse_area(layer)
        .on_press(SidebarIntent::BackdropPressed)
        .into()
}
