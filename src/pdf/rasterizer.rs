use super::RenderTicket;
use crate::document::{DocumentLayout, DocumentRef, PageSize, RenderedPage};
use anyhow::{Context, Result, anyhow};
use pdfium_render::prelude::{PdfBitmapFormat, PdfDocument, PdfRenderConfig, Pdfium};
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, info};

/// Longest edge of a single page bitmap, whatever the zoom.
pub const MAX_PAGE_EDGE_PX: i32 = 8192;

/// Reads page geometry and renders single pages.
///
/// Runs on the executor, never on the UI thread.
pub trait PageRasterizer: Send + Sync {
    /// Page sizes of `document`, without rendering.
    fn layout(&self, document: &DocumentRef) -> Result<DocumentLayout>;

    /// Render page `index` at `scale` pixels per PDF point. Returns `None`
    /// when `ticket` went stale before rendering started.
    fn render_page(
        &self,
        document: &DocumentRef,
        index: usize,
        scale: f32,
        ticket: &RenderTicket,
    ) -> Result<Option<RenderedPage>>;
}

pub struct PdfiumRasterizer {
    // PDFium is not re-entrant; all calls go through this lock.
    pdfium: Mutex<Pdfium>,
}

impl PdfiumRasterizer {
    pub fn new(pdfium: Pdfium) -> Self {
        Self {
            pdfium: Mutex::new(pdfium),
        }
    }

    fn open<'a>(pdfium: &'a Pdfium, document: &DocumentRef) -> Result<PdfDocument<'a>> {
        pdfium
            .load_pdf_from_file(document.path(), None)
            .map_err(|err| anyhow!("{err}"))
            .with_context(|| format!("Failed to open {}", document.path().display()))
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn layout(&self, document: &DocumentRef) -> Result<DocumentLayout> {
        let pdfium = self
            .pdfium
            .lock()
            .map_err(|_| anyhow!("PDFium lock poisoned"))?;
        let pdf = Self::open(&pdfium, document)?;
        let pages = pdf
            .pages()
            .iter()
            .map(|page| PageSize {
                width_pt: page.width().value,
                height_pt: page.height().value,
            })
            .collect::<Vec<_>>();
        info!(
            path = %document.path().display(),
            pages = pages.len(),
            "Read document layout"
        );
        Ok(DocumentLayout { pages })
    }

    fn render_page(
        &self,
        document: &DocumentRef,
        index: usize,
        scale: f32,
        ticket: &RenderTicket,
    ) -> Result<Option<RenderedPage>> {
        if ticket.is_stale() {
            return Ok(None);
        }
        let pdfium = self
            .pdfium
            .lock()
            .map_err(|_| anyhow!("PDFium lock poisoned"))?;
        // Other renders may have held the lock long enough for this one to
        // be superseded.
        if ticket.is_stale() {
            debug!(page = index + 1, epoch = ticket.epoch(), "Skipping superseded render");
            return Ok(None);
        }
        let started = Instant::now();
        let pdf = Self::open(&pdfium, document)?;
        let page_index =
            u16::try_from(index).map_err(|_| anyhow!("page index {index} out of range"))?;
        let page = pdf
            .pages()
            .get(page_index)
            .map_err(|err| anyhow!("{err}"))
            .with_context(|| format!("Failed to read page {}", index + 1))?;

        let target_width =
            ((page.width().value * scale).round() as i32).clamp(1, MAX_PAGE_EDGE_PX);
        let render_config = PdfRenderConfig::new()
            .set_target_width(target_width)
            .set_maximum_width(MAX_PAGE_EDGE_PX)
            .set_maximum_height(MAX_PAGE_EDGE_PX)
            .render_form_data(true)
            .render_annotations(true)
            .set_reverse_byte_order(false)
            .set_format(PdfBitmapFormat::BGRA);
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|err| anyhow!("{err}"))
            .with_context(|| format!("Failed to render page {}", index + 1))?;

        let width = bitmap.width().max(0) as usize;
        let height = bitmap.height().max(0) as usize;
        let pixels = bgra_to_rgba(&bitmap.as_raw_bytes(), width, height);
        debug!(
            page = index + 1,
            width,
            height,
            scale,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Rendered page"
        );
        Ok(Some(RenderedPage {
            width: width as u32,
            height: height as u32,
            pixels,
        }))
    }
}

/// Convert a possibly padded BGRA buffer into tightly packed RGBA.
fn bgra_to_rgba(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    let stride = if height == 0 { 0 } else { src.len() / height };
    let mut pixels = Vec::with_capacity(width.saturating_mul(height).saturating_mul(4));
    for y in 0..height {
        let base = y.saturating_mul(stride);
        for x in 0..width {
            let idx = base.saturating_add(x.saturating_mul(4));
            let b = src.get(idx).copied().unwrap_or(255);
            let g = src.get(idx + 1).copied().unwrap_or(255);
            let r = src.get(idx + 2).copied().unwrap_or(255);
            let a = src.get(idx + 3).copied().unwrap_or(255);
            pixels.extend_from_slice(&[r, g, b, a]);
        }
    }
    pixels
}
