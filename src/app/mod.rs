mod messages;
mod state;
mod update;
mod view;

pub use state::{App, Launch};

use crate::config::{AppConfig, ThemeMode};
use iced::{Size, Theme, window};

/// Launch the GUI for the document named in `launch`.
pub fn run_app(launch: Launch, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(launch, config))
}
