use iced::widget::{Stack, container, row};
use iced::{Element, Length, alignment};

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::dialog::view::modal;
use crate::widgets::dialog::{DialogEvent, DialogIntent};
use crate::widgets::section::SectionViewModel;
use crate::widgets::section::view::page;
use crate::widgets::sidebar::view::{self as sidebar_view, backdrop};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let ctx = app.sidebar_ctx();
    let sidebar_vm = app.widgets.sidebar.vm(&ctx);

    let section_vm = SectionViewModel::new(
        ctx.active_section,
        ctx.is_open,
        ctx.is_narrow,
    );
    let content = page::view(page::PageProps {
        vm: section_vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Section);

    let sidebar = || {
        sidebar_view::view(sidebar_view::SidebarProps {
            vm: sidebar_vm,
            theme: theme_props,
            fonts: &app.fonts,
        })
        .map(sidebar_event)
    };

    let mut layers: Vec<Element<'_, AppEvent>> = Vec::new();

    if !sidebar_vm.is_narrow {
        layers.push(row![sidebar(), content].height(Length::Fill).into());
    } else {
        layers.push(content);
        if sidebar_vm.shows_backdrop() {
            layers.push(
                backdrop::view(backdrop::BackdropProps { theme: theme_props })
                    .map(sidebar_event),
            );
        }
        if sidebar_vm.is_visible() {
            layers.push(
                container(sidebar())
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Left)
                    .into(),
            );
        }
    }

    if let Some(vm) = app.widgets.dialog.vm() {
        layers.push(
            modal::view(modal::ModalProps {
                vm,
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(dialog_event),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn sidebar_event(intent: SidebarIntent) -> AppEvent {
    AppEvent::Sidebar(SidebarEvent::Intent(intent))
}

fn dialog_event(intent: DialogIntent) -> AppEvent {
    AppEvent::Dialog(DialogEvent::Intent(intent))
}
