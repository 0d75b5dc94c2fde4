//! Gesture disambiguation - drag vs page scroll, dead zone vs live drag.
//!
//! Classification happens once, on the first motion that moves the pointer
//! at all, and is sticky for the rest of the session so oscillating deltas
//! cannot flip it.

use super::state::{GesturePhase, GestureState};
use crate::types::Direction;
use tracing::trace;

/// Outcome of feeding one motion event through the disambiguator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionVerdict {
    /// No motion yet; the session stays unclassified
    Pending,
    /// The session belongs to page scrolling
    Scrolling,
    /// Confirmed drag still inside the dead zone
    DeadZone,
    /// Confirmed drag past the threshold
    Drag {
        /// Threshold-compensated offset, continuous at the moment it engages
        offset_px: f32,
        direction: Direction,
    },
}

impl MotionVerdict {
    /// Whether the platform default (page scroll) must be suppressed
    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::DeadZone | Self::Drag { .. })
    }
}

/// Feed the pointer position `(x, y)` into `state` and classify it.
pub fn classify_motion(
    state: &mut GestureState,
    x: f32,
    y: f32,
    drag_threshold_px: f32,
) -> MotionVerdict {
    if state.is_scrolling_past() {
        return MotionVerdict::Scrolling;
    }

    let (delta_x, delta_y) = state.deltas_to(x, y);

    if state.is_idle() {
        if delta_x == 0.0 && delta_y == 0.0 {
            return MotionVerdict::Pending;
        }
        if delta_y.abs() > delta_x.abs() {
            trace!(delta_x, delta_y, "gesture classified as page scroll");
            state.phase = GesturePhase::ScrollingPast;
            return MotionVerdict::Scrolling;
        }
        trace!(delta_x, delta_y, "gesture classified as drag");
        state.phase = GesturePhase::Dragging;
    }

    state.delta_x = delta_x;
    state.delta_y = delta_y;

    if delta_x.abs() < drag_threshold_px {
        state.is_past_scroll_threshold = false;
        return MotionVerdict::DeadZone;
    }

    state.is_past_scroll_threshold = true;
    MotionVerdict::Drag {
        offset_px: compensated_offset(delta_x, drag_threshold_px),
        direction: Direction::from_drag_delta(delta_x),
    }
}

/// `delta - sign(delta) * threshold`, so the strip starts moving from zero.
#[inline]
pub fn compensated_offset(delta_x: f32, drag_threshold_px: f32) -> f32 {
    delta_x - delta_x.signum() * drag_threshold_px
}
