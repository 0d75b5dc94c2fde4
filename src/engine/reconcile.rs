//! Reconciliation with externally owned state: slide count, item width,
//! the controlled index and config replacement.
//!
//! A controlled-index change and a completed drag are separate triggers;
//! both end up in `move_to`, never in each other.

use super::Carousel;
use crate::config::EngineConfig;
use crate::host::CarouselHost;
use crate::index::compute_triple;
use tracing::{debug, trace, warn};

impl<H: CarouselHost> Carousel<H> {
    /// Store the measured slide width. Read once per offset computation.
    pub fn set_item_width(&mut self, px: f32) {
        if !px.is_finite() || px < 0.0 {
            warn!(px, "ignoring invalid item width");
            return;
        }
        trace!(px, "item width updated");
        self.item_width = px;
    }

    /// Slides were added or removed.
    ///
    /// Recentres the triple on the controlled (or current) position without
    /// notifying the host: count changes are not navigation.
    pub fn set_slide_count(&mut self, count: usize) {
        if count == self.slide_count {
            return;
        }

        let position = self
            .config
            .controlled_index
            .or(self.current())
            .unwrap_or(0);
        self.slide_count = count;
        self.triple = self.count().map(|n| compute_triple(position as i64, n));
        self.pending_target = self.pending_target.filter(|&target| target < count);
        debug!(count, position, "slide count changed");
    }

    /// Mirror a new externally controlled index.
    pub fn set_controlled_index(&mut self, index: Option<usize>) {
        if index == self.config.controlled_index {
            return;
        }
        self.config.controlled_index = index;
        self.reconcile_controlled_index();
    }

    /// Replace the config. A changed controlled index is reconciled exactly
    /// as through [`Carousel::set_controlled_index`].
    pub fn update_config(&mut self, config: EngineConfig) {
        let controlled_index = config.controlled_index;
        self.config = EngineConfig {
            controlled_index: self.config.controlled_index,
            ..config
        };
        self.set_controlled_index(controlled_index);
    }

    fn reconcile_controlled_index(&mut self) {
        let Some(target) = self.config.controlled_index else {
            return;
        };
        if self.current() == Some(target) {
            return;
        }
        debug!(target, "reconciling controlled index");
        self.move_to(target, true);
    }
}
