use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`, grouped by concern.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    scrolling: ScrollingConfig,
    #[serde(default)]
    zoom: ZoomConfig,
    #[serde(default)]
    pdfium: PdfiumConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            page_spacing: tables.appearance.page_spacing,
            window_width: tables.window.width,
            window_height: tables.window.height,
            scroll_interval_ms: tables.scrolling.interval_ms,
            scroll_step_px: tables.scrolling.step_px,
            zoom_percent: tables.zoom.default_percent,
            pdfium_library_path: tables.pdfium.library_path,
            log_level: tables.logging.log_level,
            key_toggle_scroll: tables.keys.toggle_scroll,
            key_zoom_in: tables.keys.zoom_in,
            key_zoom_out: tables.keys.zoom_out,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_page_spacing")]
    page_spacing: u16,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            page_spacing: defaults::default_page_spacing(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrollingConfig {
    #[serde(default = "defaults::default_scroll_interval_ms")]
    interval_ms: u64,
    #[serde(default = "defaults::default_scroll_step_px")]
    step_px: f32,
}

impl Default for ScrollingConfig {
    fn default() -> Self {
        ScrollingConfig {
            interval_ms: defaults::default_scroll_interval_ms(),
            step_px: defaults::default_scroll_step_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ZoomConfig {
    #[serde(default = "defaults::default_zoom_percent")]
    default_percent: u32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        ZoomConfig {
            default_percent: defaults::default_zoom_percent(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct PdfiumConfig {
    #[serde(default)]
    library_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_scroll")]
    toggle_scroll: String,
    #[serde(default = "defaults::default_key_zoom_in")]
    zoom_in: String,
    #[serde(default = "defaults::default_key_zoom_out")]
    zoom_out: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_scroll: defaults::default_key_toggle_scroll(),
            zoom_in: defaults::default_key_zoom_in(),
            zoom_out: defaults::default_key_zoom_out(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
