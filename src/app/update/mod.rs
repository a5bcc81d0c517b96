use crate::document::DocumentRef;
use crate::pdf::RenderTicket;
use iced::widget::scrollable::Id as ScrollId;

mod autoscroll;
mod core;
mod document;
#[cfg(test)]
mod test_support;
mod zoom;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    LoadDocument {
        request_id: u64,
        document: DocumentRef,
    },
    RenderPage {
        document: DocumentRef,
        index: usize,
        scale: f32,
        ticket: RenderTicket,
    },
    ScrollBy {
        container: ScrollId,
        dy: f32,
    },
    SnapTo {
        container: ScrollId,
        fraction: f32,
    },
    QuitSafely,
}
