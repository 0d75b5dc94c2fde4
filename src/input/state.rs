//! Gesture state machine for a single pointer/touch session.
//!
//! One explicit phase replaces "is dragging" / "is scrolling" flags, so a
//! session can never be both.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging         (first meaningful motion is mostly horizontal)
//! Idle -> ScrollingPast    (first meaningful motion is mostly vertical)
//!
//! ScrollingPast is terminal for the session.
//! Any -> (session closed)  (pointer up / leave / cancel)
//! ```

use serde::Serialize;

/// Classification of the open session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum GesturePhase {
    /// Pointer is down but no meaningful motion yet
    #[default]
    Idle,
    /// Confirmed horizontal drag; the carousel reacts
    Dragging,
    /// Confirmed vertical page scroll; the carousel ignores the session
    ScrollingPast,
}

/// Positions and deltas tracked while a session is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GestureState {
    pub phase: GesturePhase,
    pub drag_start_x: f32,
    pub drag_start_y: f32,
    pub delta_x: f32,
    pub delta_y: f32,
    /// Horizontal travel has crossed the drag threshold
    pub is_past_scroll_threshold: bool,
}

impl GestureState {
    /// Fresh, unclassified state anchored at the pointer-down position
    pub fn begin(start_x: f32, start_y: f32) -> Self {
        Self {
            drag_start_x: start_x,
            drag_start_y: start_y,
            ..Default::default()
        }
    }

    /// Deltas from the anchor to `(x, y)`
    pub fn deltas_to(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.drag_start_x, y - self.drag_start_y)
    }

    /// Returns true if the session is a confirmed horizontal drag
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging)
    }

    /// Returns true if the session was handed to page scrolling
    pub fn is_scrolling_past(&self) -> bool {
        matches!(self.phase, GesturePhase::ScrollingPast)
    }

    /// Returns true if the session is not yet classified
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    /// Horizontal delta that counts on release.
    ///
    /// Sessions handed to page scrolling never move the carousel.
    pub fn release_delta(&self) -> f32 {
        if self.is_dragging() { self.delta_x } else { 0.0 }
    }
}
