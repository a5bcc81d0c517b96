use super::super::state::App;
use super::Effect;
use crate::zoom::ZoomChoice;
use tracing::info;

impl App {
    pub(super) fn handle_zoom_in(&mut self, effects: &mut Vec<Effect>) {
        if self.zoom.zoom_in() {
            self.apply_zoom(effects);
        }
    }

    pub(super) fn handle_zoom_out(&mut self, effects: &mut Vec<Effect>) {
        if self.zoom.zoom_out() {
            self.apply_zoom(effects);
        }
    }

    pub(super) fn handle_zoom_selected(&mut self, choice: ZoomChoice, effects: &mut Vec<Effect>) {
        let geometry = self.fit_geometry();
        if self.zoom.select(choice, geometry) {
            self.apply_zoom(effects);
        }
    }

    /// Follow viewport changes while a fit mode is selected.
    pub(super) fn refit_zoom(&mut self, effects: &mut Vec<Effect>) {
        let geometry = self.fit_geometry();
        if self.zoom.refit(geometry) {
            self.apply_zoom(effects);
        }
    }

    /// Redraw the mounted document at the new scale, keeping the relative
    /// scroll position.
    fn apply_zoom(&mut self, effects: &mut Vec<Effect>) {
        info!(zoom = self.zoom.percent(), mode = ?self.zoom.mode(), "Zoom changed");
        if !self.host.set_scale(self.zoom.render_scale()) {
            return;
        }
        let Some(container) = self.host.scroll_container().cloned() else {
            return;
        };
        let fraction = self.viewport.relative_y;
        let spacing = self.config.page_spacing as f32;
        let max_offset = (self.host.content_height(spacing) - self.viewport_height()).max(0.0);
        self.viewport.offset_y = fraction * max_offset;
        effects.push(Effect::SnapTo {
            container,
            fraction,
        });
        self.request_visible_pages(effects);
    }
}
