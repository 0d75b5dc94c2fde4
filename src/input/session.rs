//! Drag session - one pointer/touch interaction from down to up/cancel.
//!
//! The session owns the [`ListenerGuard`] for the global listeners attached
//! when it opened, so every way a session can end (release, cancel, engine
//! teardown, engine drop) detaches them exactly once.

use super::disambiguate::{MotionVerdict, classify_motion};
use super::state::GestureState;
use crate::host::ListenerGuard;
use serde::Serialize;

/// Input device that opened the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    pub fn from_touch_list(has_touch_list: bool) -> Self {
        if has_touch_list { Self::Touch } else { Self::Mouse }
    }
}

/// An open drag session.
#[derive(Debug)]
pub struct DragSession {
    gesture: GestureState,
    kind: PointerKind,
    listeners: ListenerGuard,
}

impl DragSession {
    /// Open a session anchored at `(start_x, start_y)`, taking ownership of
    /// the listeners attached for it.
    pub fn open(start_x: f32, start_y: f32, kind: PointerKind, listeners: ListenerGuard) -> Self {
        Self {
            gesture: GestureState::begin(start_x, start_y),
            kind,
            listeners,
        }
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// Feed a motion event through the disambiguator
    pub fn update(&mut self, x: f32, y: f32, drag_threshold_px: f32) -> MotionVerdict {
        classify_motion(&mut self.gesture, x, y, drag_threshold_px)
    }

    /// Close the session, detaching listeners, and return its final state
    pub fn close(self) -> GestureState {
        let Self {
            gesture, listeners, ..
        } = self;
        listeners.release();
        gesture
    }
}
