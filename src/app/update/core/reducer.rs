use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::ThemeMode;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::OpenPathInputChanged(path) => self.handle_open_path_input_changed(path),
            Message::OpenPathRequested => self.handle_open_path_requested(&mut effects),
            Message::DocumentLoaded { request_id, result } => {
                self.handle_document_loaded(request_id, result, &mut effects)
            }
            Message::PageRendered {
                epoch,
                index,
                result,
            } => self.handle_page_rendered(epoch, index, result),
            Message::ToggleScrolling => self.handle_toggle_scrolling(),
            Message::ScrollIntervalInputChanged(raw) => {
                self.handle_scroll_interval_input_changed(raw)
            }
            Message::ScrollIntervalSubmitted => self.handle_scroll_interval_submitted(),
            Message::AutoScrollTick => self.handle_auto_scroll_tick(&mut effects),
            Message::ZoomIn => self.handle_zoom_in(&mut effects),
            Message::ZoomOut => self.handle_zoom_out(&mut effects),
            Message::ZoomSelected(choice) => self.handle_zoom_selected(choice, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::Scrolled {
                offset_y,
                relative_y,
                viewport_width,
                viewport_height,
            } => self.handle_scrolled(
                offset_y,
                relative_y,
                viewport_width,
                viewport_height,
                &mut effects,
            ),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects)
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Theme toggled");
    }

    fn handle_scrolled(
        &mut self,
        offset_y: f32,
        relative_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        let finite_or_zero = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let width_changed =
            (finite_or_zero(viewport_width) - self.viewport.viewport_width).abs() > 0.5;
        let height_changed =
            (finite_or_zero(viewport_height) - self.viewport.viewport_height).abs() > 0.5;

        self.viewport.offset_y = finite_or_zero(offset_y);
        self.viewport.relative_y = if relative_y.is_finite() {
            relative_y.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.viewport.viewport_width = finite_or_zero(viewport_width);
        self.viewport.viewport_height = finite_or_zero(viewport_height);

        if width_changed || height_changed {
            self.refit_zoom(effects);
        }
        self.request_visible_pages(effects);
    }

    fn handle_window_resized(&mut self, width: f32, height: f32, effects: &mut Vec<Effect>) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        self.viewport.window_width = width.max(0.0);
        self.viewport.window_height = height.max(0.0);
        debug!(width, height, "Window resized");
        self.refit_zoom(effects);
        self.request_visible_pages(effects);
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            info!("Interrupt received; shutting down");
            effects.push(Effect::QuitSafely);
        }
    }
}
