//! PDF rasterization backed by PDFium.
//!
//! - `loader` - binds the PDFium shared library once at startup
//! - `rasterizer` - reads page sizes and renders single pages on request
//! - `epoch` - tickets that let superseded page renders bail out early

mod epoch;
mod loader;
mod rasterizer;

pub use epoch::{RenderEpoch, RenderTicket};
pub use loader::PdfiumLoader;
pub use rasterizer::{PageRasterizer, PdfiumRasterizer};
