//! Entry point for the PDF auto-scroll viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional document path from the command line.
//! - Load user configuration from `conf/config.toml`.
//! - Bind PDFium once and hand the renderer to the GUI.

mod app;
mod autoscroll;
mod config;
mod document;
mod pdf;
mod zoom;

use crate::app::run_app;
use crate::config::{LogLevel, load_config};
use crate::pdf::{PageRasterizer, PdfiumLoader, PdfiumRasterizer};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";
const DEFAULT_LOG_FILTER: &str = "info";

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Record a Ctrl-C request for the GUI to pick up.
pub(crate) fn request_sigint() {
    SIGINT_REQUESTED.store(true, Ordering::SeqCst);
}

/// Consume a pending Ctrl-C request.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let initial_document = parse_args()?;
    let config = load_config(Path::new(CONFIG_PATH));
    apply_config_log_level(reload_handle, config.log_level);
    info!(
        level = %config.log_level,
        interval_ms = config.scroll_interval_ms,
        zoom = config.zoom_percent,
        "Starting PDF auto-scroll viewer"
    );

    if let Err(err) = ctrlc::set_handler(request_sigint) {
        warn!("Failed to install Ctrl-C handler: {err}");
    }

    let rasterizer = match PdfiumLoader::load(config.pdfium_library_path.as_deref().map(Path::new))
    {
        Ok(pdfium) => Ok(Arc::new(PdfiumRasterizer::new(pdfium)) as Arc<dyn PageRasterizer>),
        Err(err) => {
            error!("PDF rendering unavailable: {err:#}");
            Err(format!("{err:#}"))
        }
    };

    if let Some(path) = &initial_document {
        info!(path = %path.display(), "Opening document from command line");
    }
    run_app(config, initial_document, rasterizer).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(None);
    };
    if args.next().is_some() {
        return Err(anyhow!("Usage: pdf-autoscroll [path-to-pdf]"));
    }

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.as_path().display()));
    }
    Ok(Some(path))
}

fn init_tracing() -> ReloadHandle {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

/// Switch to `logging.log_level` from the config file. `RUST_LOG` wins when
/// it is set.
fn apply_config_log_level(handle: &ReloadHandle, level: LogLevel) {
    if env::var_os("RUST_LOG").is_some() {
        debug!(%level, "RUST_LOG is set; ignoring logging.log_level from {CONFIG_PATH}");
        return;
    }
    match handle.reload(EnvFilter::new(level.as_filter_str())) {
        Ok(()) => debug!(%level, "Log level taken from {CONFIG_PATH}"),
        Err(err) => warn!(%level, "Could not switch log level: {err}"),
    }
}
