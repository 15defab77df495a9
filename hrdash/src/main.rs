mod app;
mod components;
mod config;
mod guards;
mod layout;
mod menu;
mod routers;
mod shared;
mod state;
mod widgets;

use env_logger::Env;
use iced::{Size, window};
use image::ImageFormat;

use crate::app::App;
use crate::layout::{DEFAULT_WINDOW_SIZE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::shared::ui::icons::LOGO;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .antialiasing(true)
        .window(window::Settings {
            size: DEFAULT_WINDOW_SIZE,
            min_size: Some(Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }),
            icon: window::icon::from_file_data(LOGO, Some(ImageFormat::Png))
                .ok(),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}
