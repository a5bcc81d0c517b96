use crate::document::{DocumentLayout, DocumentRef, PageSize, RenderedPage};
use crate::pdf::{RenderEpoch, RenderTicket};
use iced::widget::image::Handle;
use iced::widget::scrollable::Id as ScrollId;
use std::collections::HashSet;
use std::ops::Range;

/// Place of one page in the column. Only pages near the viewport hold an
/// image; the rest keep their size so the layout does not jump.
#[derive(Debug, Clone)]
pub struct PageSlot {
    pub(in crate::app) size: PageSize,
    pub(in crate::app) image: Option<Handle>,
}

impl PageSlot {
    /// On-screen size at `scale` pixels per point.
    pub(in crate::app) fn display_size(&self, scale: f32) -> (f32, f32) {
        (self.size.width_pt * scale, self.size.height_pt * scale)
    }
}

/// Document load requested but not yet delivered.
#[derive(Debug, Clone)]
pub struct PendingLoad {
    pub(in crate::app) request_id: u64,
    pub(in crate::app) document: DocumentRef,
}

/// Holds the mounted document and the scroll container wrapping its pages.
///
/// The auto-scroll loop only talks to the document through
/// [`DocumentHost::scroll_container`].
#[derive(Debug, Default)]
pub struct DocumentHost {
    document: Option<DocumentRef>,
    container: Option<ScrollId>,
    slots: Vec<PageSlot>,
    scale: f32,
    in_flight: HashSet<usize>,
    epoch: RenderEpoch,
    pending: Option<PendingLoad>,
}

impl DocumentHost {
    /// Scroll container of the mounted document, if one is on screen.
    pub(in crate::app) fn scroll_container(&self) -> Option<&ScrollId> {
        self.container.as_ref()
    }

    pub(in crate::app) fn document(&self) -> Option<&DocumentRef> {
        self.document.as_ref()
    }

    pub(in crate::app) fn slots(&self) -> &[PageSlot] {
        &self.slots
    }

    pub(in crate::app) fn scale(&self) -> f32 {
        self.scale
    }

    pub(in crate::app) fn first_page_points(&self) -> Option<(f32, f32)> {
        self.slots
            .first()
            .map(|slot| (slot.size.width_pt, slot.size.height_pt))
    }

    pub(in crate::app) fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub(in crate::app) fn begin_load(&mut self, pending: PendingLoad) {
        self.pending = Some(pending);
    }

    /// Take the pending load if `request_id` is the one being waited for.
    pub(in crate::app) fn take_pending(&mut self, request_id: u64) -> Option<PendingLoad> {
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.request_id == request_id)
        {
            self.pending.take()
        } else {
            None
        }
    }

    /// Install a freshly loaded document. A new document generation gets a
    /// fresh scroll container.
    pub(in crate::app) fn mount(
        &mut self,
        document: DocumentRef,
        layout: &DocumentLayout,
        scale: f32,
    ) {
        let same_document = self
            .document
            .as_ref()
            .is_some_and(|current| current.generation() == document.generation());
        if !same_document || self.container.is_none() {
            self.container = Some(ScrollId::unique());
        }
        self.slots = layout
            .pages
            .iter()
            .map(|size| PageSlot {
                size: *size,
                image: None,
            })
            .collect();
        self.scale = scale;
        self.document = Some(document);
        self.invalidate_renders();
    }

    /// Switch to a new render scale, dropping every image drawn at the old
    /// one. Returns whether the scale changed.
    pub(in crate::app) fn set_scale(&mut self, scale: f32) -> bool {
        if (scale - self.scale).abs() < f32::EPSILON {
            return false;
        }
        self.scale = scale;
        for slot in &mut self.slots {
            slot.image = None;
        }
        self.invalidate_renders();
        true
    }

    pub(in crate::app) fn unmount(&mut self) {
        self.document = None;
        self.container = None;
        self.slots.clear();
        self.pending = None;
        self.invalidate_renders();
    }

    pub(in crate::app) fn ticket(&self) -> RenderTicket {
        self.epoch.ticket()
    }

    pub(in crate::app) fn is_current(&self, epoch: u64) -> bool {
        self.epoch.current() == epoch
    }

    /// Pages overlapping the viewport widened by `margin` on both sides.
    pub(in crate::app) fn visible_pages(
        &self,
        offset_y: f32,
        viewport_height: f32,
        spacing: f32,
        margin: f32,
    ) -> Range<usize> {
        let top = offset_y - margin;
        let bottom = offset_y + viewport_height.max(0.0) + margin;
        let mut first = None;
        let mut last = 0;
        let mut y = spacing;
        for (idx, slot) in self.slots.iter().enumerate() {
            let (_, height) = slot.display_size(self.scale);
            if y >= bottom {
                break;
            }
            if y + height > top {
                first.get_or_insert(idx);
                last = idx;
            }
            y += height + spacing;
        }
        match first {
            Some(first) => first..last + 1,
            None => 0..0,
        }
    }

    /// Pages in `range` with neither an image nor a render on the way. They
    /// are marked as on the way.
    pub(in crate::app) fn claim_missing(&mut self, range: Range<usize>) -> Vec<usize> {
        let mut claimed = Vec::new();
        for idx in range {
            let Some(slot) = self.slots.get(idx) else {
                break;
            };
            if slot.image.is_none() && self.in_flight.insert(idx) {
                claimed.push(idx);
            }
        }
        claimed
    }

    /// Drop images outside `keep`. Returns how many were released.
    pub(in crate::app) fn evict_outside(&mut self, keep: Range<usize>) -> usize {
        let mut released = 0;
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if !keep.contains(&idx) && slot.image.take().is_some() {
                released += 1;
            }
        }
        released
    }

    /// Store a rendered page. Results from an older epoch are refused.
    pub(in crate::app) fn install(&mut self, epoch: u64, index: usize, page: RenderedPage) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        self.in_flight.remove(&index);
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        slot.image = Some(Handle::from_rgba(page.width, page.height, page.pixels));
        true
    }

    /// Forget an in-flight render that produced nothing.
    pub(in crate::app) fn release(&mut self, index: usize) {
        self.in_flight.remove(&index);
    }

    /// Height of the whole page column, padding included.
    pub(in crate::app) fn content_height(&self, spacing: f32) -> f32 {
        self.slots
            .iter()
            .map(|slot| slot.display_size(self.scale).1 + spacing)
            .sum::<f32>()
            + spacing
    }

    pub(in crate::app) fn rendered_pages(&self) -> usize {
        self.slots.iter().filter(|slot| slot.image.is_some()).count()
    }

    /// Index of the page under `offset_y` for pages stacked with `spacing`
    /// between them and around the column.
    pub(in crate::app) fn page_at_offset(&self, offset_y: f32, spacing: f32) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let mut bottom = spacing;
        for (idx, slot) in self.slots.iter().enumerate() {
            bottom += slot.display_size(self.scale).1;
            if offset_y < bottom {
                return Some(idx);
            }
            bottom += spacing;
        }
        Some(self.slots.len() - 1)
    }

    fn invalidate_renders(&mut self) {
        self.epoch.advance();
        self.in_flight.clear();
    }
}
