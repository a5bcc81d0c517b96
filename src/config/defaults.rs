pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_page_spacing() -> u16 {
    12
}

pub(crate) fn default_scroll_interval_ms() -> u64 {
    20
}

pub(crate) fn default_scroll_step_px() -> f32 {
    1.0
}

pub(crate) fn default_zoom_percent() -> u32 {
    100
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_toggle_scroll() -> String {
    "space".to_string()
}

pub(crate) fn default_key_zoom_in() -> String {
    "=".to_string()
}

pub(crate) fn default_key_zoom_out() -> String {
    "-".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
