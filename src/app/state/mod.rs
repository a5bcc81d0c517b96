mod constants;
mod host;
mod ui;

use crate::autoscroll::{AutoScroll, ScrollInterval};
use crate::config::AppConfig;
use crate::pdf::PageRasterizer;
use crate::zoom::{FitGeometry, Zoom};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use host::{DocumentHost, PendingLoad};
pub(in crate::app) use ui::{ToolbarState, ViewportState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) autoscroll: AutoScroll,
    pub(super) zoom: Zoom,
    pub(super) host: DocumentHost,
    pub(super) toolbar: ToolbarState,
    pub(super) viewport: ViewportState,
    pub(super) rasterizer: Option<Arc<dyn PageRasterizer>>,
    pub(super) rasterizer_error: Option<String>,
    pub(super) next_generation: u64,
    pub(super) load_request_id: u64,
}

impl App {
    pub(super) fn bootstrap(
        mut config: AppConfig,
        rasterizer: Result<Arc<dyn PageRasterizer>, String>,
        initial_document: Option<PathBuf>,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);

        let interval = ScrollInterval::new(config.scroll_interval_ms);
        let (rasterizer, rasterizer_error) = match rasterizer {
            Ok(rasterizer) => (Some(rasterizer), None),
            Err(err) => (None, Some(err)),
        };

        let mut app = App {
            autoscroll: AutoScroll::new(interval, config.scroll_step_px),
            zoom: Zoom::new(config.zoom_percent),
            host: DocumentHost::default(),
            toolbar: ToolbarState {
                open_path_input: String::new(),
                interval_input: interval.to_string(),
                interval_input_valid: true,
                status: rasterizer_error.clone(),
            },
            viewport: ViewportState {
                window_width: config.window_width,
                window_height: config.window_height,
                ..ViewportState::default()
            },
            rasterizer,
            rasterizer_error,
            next_generation: 0,
            load_request_id: 0,
            config,
        };

        tracing::info!(
            interval_ms = app.autoscroll.interval().as_millis(),
            step_px = app.autoscroll.step_px(),
            zoom = app.zoom.percent(),
            pdfium = app.rasterizer.is_some(),
            "Initialized app state"
        );

        let task = match initial_document {
            Some(path) => {
                app.toolbar.open_path_input = path.display().to_string();
                app.update(Message::OpenPathRequested)
            }
            None => Task::none(),
        };
        (app, task)
    }

    /// Geometry for the fit zoom modes, once a page size is known.
    pub(super) fn fit_geometry(&self) -> Option<FitGeometry> {
        let (page_width, page_height) = self.host.first_page_points()?;
        let viewport_width = if self.viewport.viewport_width > 0.0 {
            self.viewport.viewport_width
        } else {
            (self.viewport.window_width - VIEWER_PADDING_PX * 2.0).max(1.0)
        };
        Some(FitGeometry {
            viewport_width,
            viewport_height: self.viewport_height(),
            page_width,
            page_height,
        })
    }

    /// Height of the page scroller, estimated from the window until the
    /// scroller reports its own bounds.
    pub(super) fn viewport_height(&self) -> f32 {
        if self.viewport.viewport_height > 0.0 {
            self.viewport.viewport_height
        } else {
            (self.viewport.window_height - TOOLBAR_HEIGHT_PX).max(1.0)
        }
    }

    pub(super) fn page_label(&self) -> Option<String> {
        let total = self.host.slots().len();
        let middle = self.viewport.offset_y + self.viewport.viewport_height * 0.5;
        let idx = self
            .host
            .page_at_offset(middle, self.config.page_spacing as f32)?;
        Some(format!("Page {} of {}", idx + 1, total))
    }
}

pub(super) fn clamp_config(config: &mut AppConfig) {
    config.window_width = sanitize_window_size(config.window_width, 1024.0);
    config.window_height = sanitize_window_size(config.window_height, 768.0);
    config.page_spacing = config.page_spacing.min(MAX_PAGE_SPACING);
    config.scroll_interval_ms = ScrollInterval::new(config.scroll_interval_ms).as_millis();
    config.zoom_percent = Zoom::new(config.zoom_percent).percent();
}

fn sanitize_window_size(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_WINDOW_SIZE)
    } else {
        fallback
    }
}
