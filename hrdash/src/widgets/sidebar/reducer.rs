use iced::Task;

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarState;
use crate::menu::SectionId;

/// Read-only caller state needed for sidebar reduction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarCtx {
    pub(crate) active_section: SectionId,
    pub(crate) is_open: bool,
    pub(crate) is_narrow: bool,
}

/// Reduce a sidebar intent into state updates and ordered effect events.
pub(crate) fn reduce(
    state: &mut SidebarState,
    intent: SidebarIntent,
    ctx: &SidebarCtx,
) -> Task<SidebarEvent> {
    apply(state, intent, ctx)
        .into_iter()
        .fold(Task::none(), |task, effect| {
            task.chain(Task::done(SidebarEvent::Effect(effect)))
        })
}

/// Mutate `state` for `intent` and return the effects in emission order.
pub(super) fn apply(
    state: &mut SidebarState,
    intent: SidebarIntent,
    ctx: &SidebarCtx,
) -> Vec<SidebarEffect> {
    match intent {
        SidebarIntent::ParentPressed(parent) => {
            state.toggle_parent(parent);
            Vec::new()
        },
        SidebarIntent::EntryPressed(section)
        | SidebarIntent::ChildPressed(section) => select_section(section, ctx),
        SidebarIntent::ActiveSectionChanged(section) => {
            state.sync_active_section(section);
            Vec::new()
        },
        SidebarIntent::ToggleOpen => vec![SidebarEffect::SetOpen(!ctx.is_open)],
        SidebarIntent::ClosePressed | SidebarIntent::BackdropPressed => {
            vec![SidebarEffect::SetOpen(false)]
        },
        SidebarIntent::HelpPressed => vec![SidebarEffect::ShowHelp],
        SidebarIntent::LogoutPressed => vec![SidebarEffect::RequestLogout],
    }
}

/// Select a section and dismiss the sidebar on narrow layouts.
fn select_section(section: SectionId, ctx: &SidebarCtx) -> Vec<SidebarEffect> {
    let mut effects = vec![SidebarEffect::SetActiveSection(section)];
    if ctx.is_narrow {
        effects.push(SidebarEffect::SetOpen(false));
    }
    effects
}
