//! Programmatic navigation - moveTo, previous/next buttons, pip jumps.

use super::Carousel;
use crate::host::CarouselHost;
use crate::types::Direction;
use tracing::{debug, warn};

impl<H: CarouselHost> Carousel<H> {
    /// Move to `position`.
    ///
    /// Out-of-range positions are ignored. Without animation the triple is
    /// recentred immediately. With animation only the offset is requested;
    /// the triple advances when the host reports settlement.
    pub fn move_to(&mut self, position: usize, animate: bool) {
        let Some(triple) = self.triple else {
            return;
        };
        if position >= self.slide_count {
            warn!(position, slide_count = self.slide_count, "move_to out of range ignored");
            return;
        }

        if !animate {
            self.pending_target = None;
            self.commit_index(position);
            return;
        }

        let offset_px = (triple.current as f32 - position as f32) * self.item_width;
        if offset_px == 0.0 {
            // Nothing visible to animate, so no settlement will follow.
            self.pending_target = None;
            if position != triple.current {
                self.commit_index(position);
            }
            return;
        }
        debug!(from = triple.current, to = position, offset_px, "animated move requested");
        self.pending_target = Some(position);
        self.apply_offset(offset_px, true);
    }

    /// Previous-button press
    pub fn on_previous(&mut self) {
        self.step(Direction::Backward);
    }

    /// Next-button press
    pub fn on_next(&mut self) {
        self.step(Direction::Forward);
    }

    /// Pagination indicator jump. Never animated: intermediate slides may
    /// not be loaded.
    pub fn on_pip_selected(&mut self, index: usize) {
        self.move_to(index, false);
    }

    /// Whether a single step in `direction` is allowed from the current slide.
    pub fn can_move(&self, direction: Direction) -> bool {
        let Some(triple) = self.triple else {
            return false;
        };
        if self.slide_count <= 1 {
            return false;
        }
        if self.config.allow_looping {
            return true;
        }
        match direction {
            Direction::Backward => triple.current > 0,
            Direction::Forward => triple.current != self.slide_count - 1,
        }
    }

    fn step(&mut self, direction: Direction) {
        if self.session.is_some() {
            debug!(?direction, "step ignored during drag session");
            return;
        }
        if !self.can_move(direction) {
            debug!(?direction, "step ignored at edge");
            return;
        }

        self.pending_target = None;
        self.host.directional_move(direction);
        self.apply_offset(direction.offset_for(self.item_width), true);
    }
}
