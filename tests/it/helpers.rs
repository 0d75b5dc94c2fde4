//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCarouselBuilder` - Builder pattern for engines backed by a `RecordingHost`
//! - Gesture helpers like `drag()` and `drag_and_settle()`
//! - Common assertions

use carousel_engine::replay::RecordingHost;
use carousel_engine::{Carousel, EngineConfig};

// ============================================================================
// TestCarouselBuilder
// ============================================================================

/// Builder for engines used in tests.
///
/// # Example
/// ```ignore
/// let carousel = TestCarouselBuilder::new(5)
///     .with_thresholds(10.0, 50.0)
///     .without_looping()
///     .build();
/// ```
pub struct TestCarouselBuilder {
    slides: usize,
    config: EngineConfig,
    item_width: f32,
}

impl TestCarouselBuilder {
    pub fn new(slides: usize) -> Self {
        Self {
            slides,
            config: EngineConfig::default().with_thresholds(10.0, 50.0),
            item_width: 300.0,
        }
    }

    pub fn with_thresholds(mut self, drag: f32, mv: f32) -> Self {
        self.config = self.config.with_thresholds(drag, mv);
        self
    }

    pub fn without_looping(mut self) -> Self {
        self.config = self.config.with_looping(false);
        self
    }

    pub fn with_controlled_index(mut self, index: usize) -> Self {
        self.config = self.config.with_controlled_index(Some(index));
        self
    }

    pub fn with_item_width(mut self, px: f32) -> Self {
        self.item_width = px;
        self
    }

    pub fn build(self) -> Carousel<RecordingHost> {
        let mut carousel = Carousel::new(RecordingHost::new(), self.config, self.slides);
        carousel.set_item_width(self.item_width);
        carousel
    }
}

// ============================================================================
// Gesture helpers
// ============================================================================

/// Horizontal drag from x=0 to `to_x` and release.
pub fn drag(carousel: &mut Carousel<RecordingHost>, to_x: f32) {
    carousel.on_pointer_down(0.0, 0.0, false);
    carousel.on_pointer_move(to_x, 0.0);
    carousel.on_pointer_up();
}

/// Drag, release and let the render sink settle.
pub fn drag_and_settle(carousel: &mut Carousel<RecordingHost>, to_x: f32) {
    drag(carousel, to_x);
    carousel.on_transition_settled();
}

pub fn assert_current(carousel: &Carousel<RecordingHost>, expected: usize) {
    assert_eq!(
        carousel.current(),
        Some(expected),
        "expected current slide {expected}"
    );
}
