use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter shared with queued page renders. Advancing it turns every ticket
/// handed out so far stale, so jobs for an old zoom or document stop before
/// they touch PDFium.
#[derive(Clone, Debug, Default)]
pub struct RenderEpoch {
    current: Arc<AtomicU64>,
}

impl RenderEpoch {
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }

    pub fn advance(&self) -> u64 {
        self.current.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn ticket(&self) -> RenderTicket {
        RenderTicket {
            epoch: self.current(),
            latest: Arc::clone(&self.current),
        }
    }
}

/// Snapshot of the epoch a render was requested in.
#[derive(Clone, Debug)]
pub struct RenderTicket {
    epoch: u64,
    latest: Arc<AtomicU64>,
}

impl RenderTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_stale(&self) -> bool {
        self.latest.load(Ordering::Acquire) != self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_invalidates_earlier_tickets() {
        let epoch = RenderEpoch::default();
        let first = epoch.ticket();
        assert!(!first.is_stale());

        assert_eq!(epoch.advance(), 1);
        let second = epoch.ticket();
        assert!(first.is_stale());
        assert!(!second.is_stale());
        assert_eq!(second.epoch(), 1);
    }

    #[test]
    fn clones_share_the_counter() {
        let epoch = RenderEpoch::default();
        let ticket = epoch.ticket();
        let shared = epoch.clone();
        shared.advance();
        assert!(ticket.is_stale());
        assert_eq!(epoch.current(), 1);
    }
}
