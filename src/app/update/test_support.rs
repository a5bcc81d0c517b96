use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use crate::config::AppConfig;
use crate::document::{DocumentLayout, DocumentRef, PageSize, RenderedPage};
use crate::pdf::{PageRasterizer, RenderTicket};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Produces letter-sized blank pages without touching PDFium.
pub(super) struct BlankRasterizer;

impl PageRasterizer for BlankRasterizer {
    fn layout(&self, _document: &DocumentRef) -> Result<DocumentLayout> {
        Ok(letter_layout(2))
    }

    fn render_page(
        &self,
        _document: &DocumentRef,
        _index: usize,
        _scale: f32,
        ticket: &RenderTicket,
    ) -> Result<Option<RenderedPage>> {
        if ticket.is_stale() {
            return Ok(None);
        }
        Ok(Some(blank_page()))
    }
}

pub(super) fn letter_layout(pages: usize) -> DocumentLayout {
    DocumentLayout {
        pages: vec![
            PageSize {
                width_pt: 612.0,
                height_pt: 792.0,
            };
            pages
        ],
    }
}

pub(super) fn blank_page() -> RenderedPage {
    RenderedPage {
        width: 4,
        height: 4,
        pixels: vec![255; 4 * 4 * 4],
    }
}

pub(super) fn scratch_pdf(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pdf-autoscroll-update-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("scratch dir");
    let path = dir.join(name);
    std::fs::write(&path, b"%PDF-1.7\n").expect("scratch pdf");
    path
}

pub(super) fn test_app() -> App {
    let (app, _task) = App::bootstrap(
        AppConfig::default(),
        Ok(Arc::new(BlankRasterizer) as Arc<dyn PageRasterizer>),
        None,
    );
    app
}

/// Open `name` and return the request id of the load it triggered.
pub(super) fn request_open(app: &mut App, name: &str) -> u64 {
    let path = scratch_pdf(name);
    let _ = app.reduce(Message::OpenPathInputChanged(path.display().to_string()));
    let effects = app.reduce(Message::OpenPathRequested);
    match effects.as_slice() {
        [Effect::LoadDocument { request_id, .. }] => *request_id,
        other => panic!("expected one load effect, got {other:?}"),
    }
}

/// Answer load `request_id` with `pages` letter-sized pages.
pub(super) fn deliver(app: &mut App, request_id: u64, pages: usize) -> Vec<Effect> {
    app.reduce(Message::DocumentLoaded {
        request_id,
        result: Ok(Arc::new(letter_layout(pages))),
    })
}

/// Open and mount a three page document in one go.
pub(super) fn load(app: &mut App, name: &str) {
    let request_id = request_open(app, name);
    let _ = deliver(app, request_id, 3);
}

/// Page indices of the render effects in `effects`, in order.
pub(super) fn page_renders(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::RenderPage { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}

/// Complete every render in `effects` with a blank page.
pub(super) fn render_all(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        if let Effect::RenderPage { index, ticket, .. } = effect {
            let _ = app.reduce(Message::PageRendered {
                epoch: ticket.epoch(),
                index,
                result: Ok(Some(Arc::new(blank_page()))),
            });
        }
    }
}
