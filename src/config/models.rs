use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_page_spacing")]
    pub page_spacing: u16,
    #[serde(default = "crate::config::defaults::default_scroll_interval_ms")]
    pub scroll_interval_ms: u64,
    #[serde(default = "crate::config::defaults::default_scroll_step_px")]
    pub scroll_step_px: f32,
    #[serde(default = "crate::config::defaults::default_zoom_percent")]
    pub zoom_percent: u32,
    /// Explicit location of the PDFium shared library. When unset the
    /// loader searches the usual locations.
    #[serde(default)]
    pub pdfium_library_path: Option<String>,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_toggle_scroll")]
    pub key_toggle_scroll: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_in")]
    pub key_zoom_in: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_out")]
    pub key_zoom_out: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Day,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            page_spacing: crate::config::defaults::default_page_spacing(),
            scroll_interval_ms: crate::config::defaults::default_scroll_interval_ms(),
            scroll_step_px: crate::config::defaults::default_scroll_step_px(),
            zoom_percent: crate::config::defaults::default_zoom_percent(),
            pdfium_library_path: None,
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_scroll: crate::config::defaults::default_key_toggle_scroll(),
            key_zoom_in: crate::config::defaults::default_key_zoom_in(),
            key_zoom_out: crate::config::defaults::default_key_zoom_out(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
