/// Text fields and status line of the toolbar.
pub struct ToolbarState {
    pub(in crate::app) open_path_input: String,
    pub(in crate::app) interval_input: String,
    pub(in crate::app) interval_input_valid: bool,
    pub(in crate::app) status: Option<String>,
}

/// Last geometry reported by the window and the page scroller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportState {
    pub(in crate::app) offset_y: f32,
    pub(in crate::app) relative_y: f32,
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) viewport_height: f32,
    pub(in crate::app) window_width: f32,
    pub(in crate::app) window_height: f32,
}
