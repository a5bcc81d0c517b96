use std::time::Duration;

/// Limits and defaults for viewer controls.
pub(crate) const MAX_PAGE_SPACING: u16 = 64;
pub(crate) const MIN_WINDOW_SIZE: f32 = 320.0;
pub(crate) const TOOLBAR_HEIGHT_PX: f32 = 96.0;
pub(crate) const VIEWER_PADDING_PX: f32 = 16.0;
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Pages this far above or below the viewport are rendered ahead of time.
pub(crate) const PAGE_PREFETCH_MARGIN_PX: f32 = 800.0;
/// Rendered pages kept beyond the prefetch window before they are dropped.
pub(crate) const PAGE_KEEP_EXTRA: usize = 2;
