//! Pointer and touch entry points.
//!
//! ## Performance Notes
//!
//! Pointer move fires at display rate during a drag. Each call does one
//! classification and at most one offset request; nothing is allocated.

use super::Carousel;
use crate::host::CarouselHost;
use crate::input::{DragSession, MotionVerdict, PointerKind};
use serde::Serialize;
use tracing::{debug, trace};

/// What the caller should do with the platform event it forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerResponse {
    /// Not consumed; let the platform handle it
    Ignored,
    /// Consumed, but the platform default may still run
    Tracked,
    /// Consumed; the platform default (page scroll, click) must be suppressed
    SuppressDefault,
}

impl PointerResponse {
    pub fn suppresses_default(self) -> bool {
        matches!(self, Self::SuppressDefault)
    }
}

impl<H: CarouselHost> Carousel<H> {
    /// Pointer or touch down on the drag surface.
    pub fn on_pointer_down(&mut self, x: f32, y: f32, has_touch_list: bool) -> PointerResponse {
        if self.session.is_some() {
            debug!("pointer down ignored: session already open");
            return PointerResponse::Ignored;
        }
        if self.transition.animating {
            // Absorbed click: no dragging while a transition is in flight.
            debug!("pointer down absorbed during transition");
            return PointerResponse::SuppressDefault;
        }
        if self.triple.is_none() {
            return PointerResponse::Ignored;
        }

        let kind = PointerKind::from_touch_list(has_touch_list);
        let listeners = self.host.attach_global_listeners();
        self.session = Some(DragSession::open(x, y, kind, listeners));
        debug!(x, y, ?kind, "drag session opened");
        PointerResponse::Tracked
    }

    /// Pointer or touch motion, delivered in order while a session is open.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> PointerResponse {
        let drag_threshold_px = self.config.drag_threshold_px;
        let Some(session) = self.session.as_mut() else {
            return PointerResponse::Ignored;
        };

        match session.update(x, y, drag_threshold_px) {
            MotionVerdict::Pending => PointerResponse::Tracked,
            MotionVerdict::Scrolling => PointerResponse::Ignored,
            MotionVerdict::DeadZone => PointerResponse::SuppressDefault,
            MotionVerdict::Drag {
                offset_px,
                direction,
            } => {
                if self.can_move(direction) {
                    trace!(offset_px, "live drag offset");
                    self.apply_offset(offset_px, false);
                }
                PointerResponse::SuppressDefault
            }
        }
    }

    /// Pointer or touch released
    pub fn on_pointer_up(&mut self) {
        self.end_session();
    }

    /// Pointer left the tracked surface, or the platform cancelled the touch.
    /// Treated as a release at the last known position.
    pub fn on_pointer_leave_or_cancel(&mut self) {
        if self.session.is_some() {
            debug!("drag session cancelled");
        }
        self.end_session();
    }
}
