//! Engine-wide constants.
//!
//! Centralizes default thresholds and timings so configuration defaults,
//! tests and the replay tool agree on the same values.

// ============================================================================
// Gesture Thresholds
// ============================================================================

/// Horizontal travel (px) absorbed as dead zone before a drag moves the slides
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 10.0;

/// Horizontal travel (px) a released drag needs to commit to a slide change
pub const DEFAULT_MOVE_THRESHOLD_PX: f32 = 50.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Slide transition duration in seconds
pub const DEFAULT_ANIMATION_DURATION_SEC: f32 = 0.3;

// ============================================================================
// Navigation
// ============================================================================

/// Whether navigation wraps past the first/last slide by default
pub const DEFAULT_ALLOW_LOOPING: bool = true;

/// Number of render slots (previous, current, next)
pub const RENDER_SLOT_COUNT: usize = 3;

// ============================================================================
// Replay
// ============================================================================

/// Item width assumed by replay scripts that don't specify one
pub const REPLAY_ITEM_WIDTH_PX: f32 = 320.0;
