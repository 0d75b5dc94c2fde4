//! Core value types shared by the engine, its host and the render sink.

use crate::constants::RENDER_SLOT_COUNT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Navigation Types
// ============================================================================

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward lower indices (previous slide)
    Backward,
    /// Toward higher indices (next slide)
    Forward,
}

impl Direction {
    /// Direction implied by a horizontal pointer delta.
    ///
    /// Dragging left (negative delta) pulls the next slide in.
    pub fn from_drag_delta(delta_x: f32) -> Self {
        if delta_x < 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Direction implied by a settled offset: negative offsets advance.
    pub fn from_offset(offset_px: f32) -> Self {
        Self::from_drag_delta(offset_px)
    }

    /// Signed index step for this direction
    pub fn step(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// Offset that slides one full item width in this direction
    pub fn offset_for(self, item_width: f32) -> f32 {
        match self {
            Self::Backward => item_width,
            Self::Forward => -item_width,
        }
    }
}

// ============================================================================
// Transition Types
// ============================================================================

/// Offset currently requested from the render sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TransitionState {
    /// Horizontal pixel offset applied to the slide strip
    pub offset_px: f32,
    /// Whether the sink should interpolate toward `offset_px`
    pub animating: bool,
}

impl TransitionState {
    /// Reset to `{0, false}` once a transition settles
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Instruction for the render sink: apply an offset, optionally animated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OffsetRequest {
    pub offset_px: f32,
    pub animate: bool,
    /// Interpolation time; zero when `animate` is false
    #[serde(skip)]
    pub duration: Duration,
}

// ============================================================================
// Render Types
// ============================================================================

/// Render slot a slide occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlideRole {
    Previous,
    Current,
    Next,
}

/// Props handed to the slide renderer for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideProps {
    pub role: SlideRole,
    /// Logical slide index in `[0, N)`
    pub index: usize,
    pub is_active: bool,
    pub is_animating: bool,
    pub is_dragging: bool,
}

/// Everything a renderer needs to draw the carousel at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub slides: [SlideProps; RENDER_SLOT_COUNT],
    pub offset_px: f32,
    pub animating: bool,
}
