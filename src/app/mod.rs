mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::pdf::PageRasterizer;
use iced::{Size, Theme, window};
use std::path::PathBuf;
use std::sync::Arc;

/// Launch the viewer, optionally opening `initial_document` right away.
///
/// A missing PDF backend is passed in as its error message; the window still
/// opens and reports it when a document is requested.
pub fn run_app(
    config: AppConfig,
    initial_document: Option<PathBuf>,
    rasterizer: Result<Arc<dyn PageRasterizer>, String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(
            state::MIN_WINDOW_SIZE,
            state::MIN_WINDOW_SIZE,
        )),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, crate::config::ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(config, rasterizer, initial_document))
}
