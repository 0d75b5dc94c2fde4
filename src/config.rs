//! Engine configuration.
//!
//! `EngineConfig` is supplied once at construction and may be replaced later
//! through [`Carousel::update_config`](crate::Carousel::update_config).
//! Missing JSON fields fall back to the defaults in [`crate::constants`].

use crate::constants::{
    DEFAULT_ALLOW_LOOPING, DEFAULT_ANIMATION_DURATION_SEC, DEFAULT_DRAG_THRESHOLD_PX,
    DEFAULT_MOVE_THRESHOLD_PX,
};
use crate::error::{CarouselError, CarouselResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunables for navigation and gesture handling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Wrap past the first/last slide instead of stopping
    pub allow_looping: bool,
    /// Horizontal dead zone before a confirmed drag moves the slides
    pub drag_threshold_px: f32,
    /// Horizontal travel a released drag needs to commit
    pub move_threshold_px: f32,
    /// Duration of animated transitions
    pub animation_duration_sec: f32,
    /// Externally controlled slide position the engine mirrors
    pub controlled_index: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_looping: DEFAULT_ALLOW_LOOPING,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            move_threshold_px: DEFAULT_MOVE_THRESHOLD_PX,
            animation_duration_sec: DEFAULT_ANIMATION_DURATION_SEC,
            controlled_index: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from a JSON document
    pub fn from_json(json: &str) -> CarouselResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// Check that thresholds and durations are usable.
    pub fn validate(&self) -> CarouselResult<()> {
        check_non_negative("drag_threshold_px", self.drag_threshold_px)?;
        check_non_negative("move_threshold_px", self.move_threshold_px)?;
        check_non_negative("animation_duration_sec", self.animation_duration_sec)?;
        Ok(())
    }

    pub fn with_looping(mut self, allow_looping: bool) -> Self {
        self.allow_looping = allow_looping;
        self
    }

    pub fn with_thresholds(mut self, drag_threshold_px: f32, move_threshold_px: f32) -> Self {
        self.drag_threshold_px = drag_threshold_px;
        self.move_threshold_px = move_threshold_px;
        self
    }

    pub fn with_controlled_index(mut self, index: Option<usize>) -> Self {
        self.controlled_index = index;
        self
    }

    /// Animation duration as a `Duration`, clamped to zero for invalid values
    pub fn animation_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.animation_duration_sec).unwrap_or(Duration::ZERO)
    }
}

fn check_non_negative(field: &'static str, value: f32) -> CarouselResult<()> {
    if !value.is_finite() {
        return Err(CarouselError::invalid(field, "must be finite"));
    }
    if value < 0.0 {
        return Err(CarouselError::invalid(field, format!("must be >= 0, got {value}")));
    }
    Ok(())
}
