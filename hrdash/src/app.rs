#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::config::{ResolvedConfig, load_initial_config};
use crate::layout::DEFAULT_WINDOW_SIZE;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::dialog::{DialogEvent, DialogWidget};
use crate::widgets::section::SectionIntent;
use crate::widgets::sidebar::{SidebarCtx, SidebarEvent, SidebarWidget};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Sidebar(SidebarEvent),
    Dialog(DialogEvent),
    Section(SectionIntent),
    Window(window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) dialog: DialogWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application from the settings file.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = Self::from_config(load_initial_config(), DEFAULT_WINDOW_SIZE);
        (app, Task::none())
    }

    /// Build the application from already validated settings.
    pub(crate) fn from_config(config: ResolvedConfig, window_size: Size) -> Self {
        let mut theme_manager = ThemeManager::new();
        theme_manager.set_custom_palette(&config.palette);

        let state = State::new(
            window_size,
            config.initial_section,
            config.sidebar_open,
        );
        log::info!(
            "starting at section '{}' (sidebar open: {})",
            state.active_section,
            state.sidebar_open
        );

        let widgets = Widgets {
            sidebar: SidebarWidget::new(state.active_section),
            dialog: DialogWidget::new(),
        };

        App {
            theme_manager,
            fonts: FontsConfig::default(),
            state,
            widgets,
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("HR Dashboard")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        view::view(self)
    }

    /// Snapshot of caller state handed to the sidebar.
    pub(crate) fn sidebar_ctx(&self) -> SidebarCtx {
        SidebarCtx {
            active_section: self.state.active_section,
            is_open: self.state.sidebar_open,
            is_narrow: self.state.layout_mode().is_narrow(),
        }
    }
}
