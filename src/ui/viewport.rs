//! Terminal stand-in for a browser intersection observer.
//!
//! Blocks are laid out in document rows. After every scroll or resize the
//! host calls [`ViewportObserver::poll`] and delivers the returned
//! intersection changes to the matching reveal controllers.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::reveal::{BlockId, ObserveError, VisibilityObserver};

/// Vertical extent of a block in document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub top: u16,
    pub height: u16,
}

#[derive(Debug)]
struct Watch {
    threshold: f32,
    /// Last reported state. `None` until the first poll.
    last: Option<bool>,
}

#[derive(Debug, Default)]
struct ViewportInner {
    scroll: u16,
    height: u16,
    extents: BTreeMap<BlockId, Extent>,
    watches: BTreeMap<BlockId, Watch>,
}

/// Share of `extent` inside the rows `[scroll, scroll + height)`.
fn visible_fraction(extent: Extent, scroll: u16, height: u16) -> f32 {
    if extent.height == 0 {
        return 0.0;
    }
    let top = u32::from(extent.top);
    let bottom = top + u32::from(extent.height);
    let view_top = u32::from(scroll);
    let view_bottom = view_top + u32::from(height);
    let overlap = bottom.min(view_bottom).saturating_sub(top.max(view_top));
    overlap as f32 / f32::from(extent.height)
}

/// Shared handle; clones observe the same viewport.
#[derive(Debug, Clone, Default)]
pub struct ViewportObserver {
    inner: Arc<Mutex<ViewportInner>>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare where a block sits. Only placed blocks can be observed.
    pub fn place(&self, block: BlockId, extent: Extent) {
        self.inner.lock().extents.insert(block, extent);
    }

    pub fn set_viewport(&self, scroll: u16, height: u16) {
        let mut inner = self.inner.lock();
        inner.scroll = scroll;
        inner.height = height;
    }

    pub fn is_observing(&self, block: BlockId) -> bool {
        self.inner.lock().watches.contains_key(&block)
    }

    /// Intersection changes since the last poll, including the first
    /// report for newly observed blocks.
    pub fn poll(&self) -> Vec<(BlockId, bool)> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let mut changes = Vec::new();
        for (block, watch) in inner.watches.iter_mut() {
            let Some(extent) = inner.extents.get(block).copied() else {
                continue;
            };
            let fraction = visible_fraction(extent, inner.scroll, inner.height);
            let intersecting = fraction > 0.0 && fraction >= watch.threshold;
            if watch.last != Some(intersecting) {
                watch.last = Some(intersecting);
                changes.push((*block, intersecting));
            }
        }
        changes
    }
}

impl VisibilityObserver for ViewportObserver {
    fn observe(&mut self, block: BlockId, threshold: f32) -> Result<(), ObserveError> {
        let mut inner = self.inner.lock();
        if !inner.extents.contains_key(&block) {
            return Err(ObserveError::UnknownBlock(block));
        }
        inner.watches.insert(
            block,
            Watch {
                threshold,
                last: None,
            },
        );
        Ok(())
    }

    fn unobserve(&mut self, block: BlockId) {
        self.inner.lock().watches.remove(&block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer_with(blocks: &[(u64, u16, u16)]) -> ViewportObserver {
        let observer = ViewportObserver::new();
        for &(id, top, height) in blocks {
            observer.place(BlockId(id), Extent { top, height });
        }
        observer
    }

    #[test]
    fn first_poll_reports_initial_state() {
        let mut observer = observer_with(&[(1, 0, 10), (2, 30, 10)]);
        observer.set_viewport(0, 20);
        observer.observe(BlockId(1), 0.1).unwrap();
        observer.observe(BlockId(2), 0.1).unwrap();
        assert_eq!(
            observer.poll(),
            vec![(BlockId(1), true), (BlockId(2), false)]
        );
        assert!(observer.poll().is_empty());
    }

    #[test]
    fn scrolling_crosses_threshold() {
        let mut observer = observer_with(&[(1, 30, 10)]);
        observer.set_viewport(0, 20);
        observer.observe(BlockId(1), 0.5).unwrap();
        observer.poll();

        observer.set_viewport(14, 20);
        assert!(observer.poll().is_empty(), "4 of 10 rows visible");
        observer.set_viewport(15, 20);
        assert_eq!(observer.poll(), vec![(BlockId(1), true)]);
    }

    #[test]
    fn unplaced_block_is_unknown() {
        let mut observer = ViewportObserver::new();
        assert_eq!(
            observer.observe(BlockId(9), 0.1),
            Err(ObserveError::UnknownBlock(BlockId(9)))
        );
    }

    #[test]
    fn unobserved_blocks_stop_reporting() {
        let mut observer = observer_with(&[(1, 0, 10)]);
        observer.set_viewport(20, 10);
        observer.observe(BlockId(1), 0.1).unwrap();
        observer.poll();
        observer.unobserve(BlockId(1));
        observer.set_viewport(0, 10);
        assert!(observer.poll().is_empty());
        assert!(!observer.is_observing(BlockId(1)));
    }
}
