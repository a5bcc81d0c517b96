use super::super::state::{App, PAGE_KEEP_EXTRA, PAGE_PREFETCH_MARGIN_PX, PendingLoad};
use super::Effect;
use crate::document::{DocumentLayout, RenderedPage, open_document};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_open_path_input_changed(&mut self, path: String) {
        self.toolbar.open_path_input = path;
    }

    /// Validate the typed path and start loading it. The active flag is
    /// left alone; ticks keep targeting whatever container is mounted.
    pub(super) fn handle_open_path_requested(&mut self, effects: &mut Vec<Effect>) {
        let raw = self.toolbar.open_path_input.trim().to_string();
        let path = PathBuf::from(&raw);
        self.next_generation += 1;

        let document = match open_document(&path, self.next_generation) {
            Ok(document) => document,
            Err(err) => {
                warn!(path = %raw, "Rejected document: {err:#}");
                self.toolbar.status = Some(format!("{err:#}"));
                return;
            }
        };

        if self.rasterizer.is_none() {
            warn!(path = %document.path().display(), "No PDF backend; cannot render");
            self.toolbar.status = self
                .rasterizer_error
                .clone()
                .or_else(|| Some("PDF backend unavailable".to_string()));
            return;
        }

        info!(
            path = %document.path().display(),
            generation = document.generation(),
            "Opening document"
        );
        self.toolbar.status = None;
        self.load_request_id += 1;
        let request_id = self.load_request_id;
        self.host.begin_load(PendingLoad {
            request_id,
            document: document.clone(),
        });
        effects.push(Effect::LoadDocument {
            request_id,
            document,
        });
    }

    pub(super) fn handle_document_loaded(
        &mut self,
        request_id: u64,
        result: Result<Arc<DocumentLayout>, String>,
        effects: &mut Vec<Effect>,
    ) {
        let Some(pending) = self.host.take_pending(request_id) else {
            debug!(request_id, "Dropping stale load result");
            return;
        };

        let layout = match result {
            Ok(layout) => layout,
            Err(err) => {
                warn!(
                    request_id,
                    path = %pending.document.path().display(),
                    "Load failed: {err}"
                );
                self.toolbar.status = Some(format!(
                    "Failed to open {}: {err}",
                    pending.document.display_name()
                ));
                return;
            }
        };

        info!(
            request_id,
            path = %pending.document.path().display(),
            pages = layout.pages.len(),
            zoom = self.zoom.percent(),
            "Mounted document"
        );
        self.viewport.offset_y = 0.0;
        self.viewport.relative_y = 0.0;
        self.host
            .mount(pending.document, &layout, self.zoom.render_scale());
        self.toolbar.status = None;

        // A fit mode may only now know the page size.
        let geometry = self.fit_geometry();
        if self.zoom.refit(geometry) {
            self.host.set_scale(self.zoom.render_scale());
        }
        self.request_visible_pages(effects);
    }

    pub(super) fn handle_page_rendered(
        &mut self,
        epoch: u64,
        index: usize,
        result: Result<Option<Arc<RenderedPage>>, String>,
    ) {
        if !self.host.is_current(epoch) {
            debug!(epoch, index, "Dropping page rendered for an old layout");
            return;
        }
        match result {
            Ok(Some(page)) => {
                let page = Arc::try_unwrap(page).unwrap_or_else(|shared| (*shared).clone());
                self.host.install(epoch, index, page);
            }
            Ok(None) => self.host.release(index),
            Err(err) => {
                warn!(index, "Page render failed: {err}");
                self.host.release(index);
                self.toolbar.status = Some(format!("Failed to render page {}: {err}", index + 1));
            }
        }
    }

    /// Queue renders for pages near the viewport and drop images far from it.
    pub(super) fn request_visible_pages(&mut self, effects: &mut Vec<Effect>) {
        let Some(document) = self.host.document().cloned() else {
            return;
        };
        let spacing = self.config.page_spacing as f32;
        let wanted = self.host.visible_pages(
            self.viewport.offset_y,
            self.viewport_height(),
            spacing,
            PAGE_PREFETCH_MARGIN_PX,
        );
        let keep = wanted.start.saturating_sub(PAGE_KEEP_EXTRA)..wanted.end + PAGE_KEEP_EXTRA;
        let released = self.host.evict_outside(keep);
        if released > 0 {
            debug!(released, "Released off-screen pages");
        }

        let ticket = self.host.ticket();
        let scale = self.host.scale();
        for index in self.host.claim_missing(wanted) {
            effects.push(Effect::RenderPage {
                document: document.clone(),
                index,
                scale,
                ticket: ticket.clone(),
            });
        }
    }
}
