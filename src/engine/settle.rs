//! Drag release policy and transition settlement.
//!
//! Releasing a drag only *requests* an offset. The logical index moves in
//! [`Carousel::on_transition_settled`], once the host reports the visual
//! transition finished.

use super::Carousel;
use crate::host::CarouselHost;
use crate::index::wrap;
use crate::types::Direction;
use tracing::{debug, trace};

impl<H: CarouselHost> Carousel<H> {
    /// The render sink finished animating (or snapping) to the requested offset.
    pub fn on_transition_settled(&mut self) {
        if self.is_dragging() && !self.transition.animating {
            trace!("settlement ignored: live drag offset");
            return;
        }

        let settled = self.transition;
        self.transition.animating = false;
        let pending = self.pending_target.take();

        let Some(triple) = self.triple else {
            self.transition.clear();
            return;
        };

        let jump = pending.filter(|&target| target != triple.current && target < self.slide_count);
        let target = match jump {
            Some(target) => target,
            None if settled.offset_px == 0.0 => {
                debug!(index = triple.current, "settled without index change");
                return;
            }
            None => {
                let Some(count) = self.count() else {
                    return;
                };
                let direction = Direction::from_offset(settled.offset_px);
                wrap(triple.current as i64 + direction.step(), count)
            }
        };

        self.commit_index(target);
    }

    /// Close the open session (if any) and decide between commit and spring-back.
    pub(super) fn end_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let kind = session.kind();
        let gesture = session.close();
        debug!(?kind, phase = ?gesture.phase, delta_x = gesture.delta_x, "drag session closed");
        self.release_drag(gesture.release_delta());
    }

    fn release_drag(&mut self, delta_x: f32) {
        if delta_x == 0.0 {
            self.apply_offset(0.0, false);
            return;
        }

        let direction = Direction::from_drag_delta(delta_x);
        if delta_x.abs() < self.config.move_threshold_px || !self.can_move(direction) {
            // A strip that never left zero has nothing to animate back from.
            let animate = self.transition.offset_px != 0.0;
            debug!(delta_x, animate, "drag released: spring back");
            self.apply_offset(0.0, animate);
            return;
        }

        debug!(delta_x, ?direction, "drag released: commit");
        self.pending_target = None;
        self.host.directional_move(direction);
        self.apply_offset(direction.offset_for(self.item_width), true);
    }
}
