use crate::document::{DocumentLayout, RenderedPage};
use crate::zoom::ZoomChoice;
use iced::keyboard::{Key, Modifiers};
use std::sync::Arc;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    OpenPathInputChanged(String),
    OpenPathRequested,
    DocumentLoaded {
        request_id: u64,
        result: Result<Arc<DocumentLayout>, String>,
    },
    PageRendered {
        epoch: u64,
        index: usize,
        result: Result<Option<Arc<RenderedPage>>, String>,
    },
    ToggleScrolling,
    ScrollIntervalInputChanged(String),
    ScrollIntervalSubmitted,
    AutoScrollTick,
    ZoomIn,
    ZoomOut,
    ZoomSelected(ZoomChoice),
    ToggleTheme,
    Scrolled {
        offset_y: f32,
        relative_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    PollSystemSignals,
    SafeQuit,
}
