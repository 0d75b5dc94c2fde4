//! Scripted replay of input traces and a recording host.
//!
//! A [`Script`] is a JSON document describing a slide set, a config and an
//! ordered list of events. [`run`] feeds the events through a [`Carousel`]
//! backed by a [`RecordingHost`] and reports every host callback, step by
//! step.
//!
//! ```json
//! {
//!   "slides": 5,
//!   "item_width": 320.0,
//!   "config": { "move_threshold_px": 50.0 },
//!   "events": [
//!     { "type": "pointer_down", "x": 0.0, "y": 0.0 },
//!     { "type": "pointer_move", "x": -60.0, "y": 2.0 },
//!     { "type": "pointer_up" },
//!     { "type": "settled" }
//!   ]
//! }
//! ```

use crate::config::EngineConfig;
use crate::constants::REPLAY_ITEM_WIDTH_PX;
use crate::engine::Carousel;
use crate::error::CarouselResult;
use crate::host::{CarouselHost, ListenerGuard};
use crate::types::{Direction, Frame, OffsetRequest};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use tracing::debug;

// ============================================================================
// Recording Host
// ============================================================================

/// One callback the engine made on its host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    SlideMoved { index: usize },
    Offset { offset_px: f32, animate: bool },
    ListenersAttached,
    ListenersDetached,
    DirectionalMove { direction: Direction },
}

/// Host that records every callback instead of rendering.
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Rc<RefCell<Vec<HostEvent>>>,
    attached: Rc<Cell<usize>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded callbacks, oldest first
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    /// Drain the recorded callbacks
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn clear(&mut self) {
        self.events.borrow_mut().clear();
    }

    /// Indices reported through `slide_moved`, in order
    pub fn slide_moves(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                HostEvent::SlideMoved { index } => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Most recent offset request as `(offset_px, animate)`
    pub fn last_offset(&self) -> Option<(f32, bool)> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            HostEvent::Offset { offset_px, animate } => Some((*offset_px, *animate)),
            _ => None,
        })
    }

    /// Number of listener sets currently attached
    pub fn attached_listeners(&self) -> usize {
        self.attached.get()
    }
}

impl CarouselHost for RecordingHost {
    fn slide_moved(&mut self, index: usize) {
        self.events.borrow_mut().push(HostEvent::SlideMoved { index });
    }

    fn request_offset(&mut self, request: OffsetRequest) {
        self.events.borrow_mut().push(HostEvent::Offset {
            offset_px: request.offset_px,
            animate: request.animate,
        });
    }

    fn attach_global_listeners(&mut self) -> ListenerGuard {
        self.attached.set(self.attached.get() + 1);
        self.events.borrow_mut().push(HostEvent::ListenersAttached);

        let events = Rc::clone(&self.events);
        let attached = Rc::clone(&self.attached);
        ListenerGuard::new(move || {
            attached.set(attached.get().saturating_sub(1));
            events.borrow_mut().push(HostEvent::ListenersDetached);
        })
    }

    fn directional_move(&mut self, direction: Direction) {
        self.events
            .borrow_mut()
            .push(HostEvent::DirectionalMove { direction });
    }
}

// ============================================================================
// Script
// ============================================================================

/// One input or external change, mirroring the public engine operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        touch: bool,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    PointerLeave,
    Settled,
    MoveTo {
        position: usize,
        #[serde(default = "default_animate")]
        animate: bool,
    },
    Previous,
    Next,
    PipSelected {
        index: usize,
    },
    SetItemWidth {
        px: f32,
    },
    SetSlideCount {
        count: usize,
    },
    SetControlledIndex {
        index: Option<usize>,
    },
}

fn default_animate() -> bool {
    true
}

fn default_item_width() -> f32 {
    REPLAY_ITEM_WIDTH_PX
}

/// A replayable input trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub slides: usize,
    #[serde(default = "default_item_width")]
    pub item_width: f32,
    #[serde(default)]
    pub config: EngineConfig,
    pub events: Vec<ReplayEvent>,
}

impl Script {
    pub fn from_json(json: &str) -> CarouselResult<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.config.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> CarouselResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }
}

// ============================================================================
// Replay
// ============================================================================

/// Outcome of a single replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub event: ReplayEvent,
    /// Whether a pointer event asked for the platform default to be suppressed
    pub suppress_default: bool,
    /// Host callbacks made while handling the event
    pub emitted: Vec<HostEvent>,
}

/// Full replay result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub current: Option<usize>,
    pub frame: Option<Frame>,
}

/// Replay `script` and report every host callback.
pub fn run(script: &Script) -> CarouselResult<ReplayReport> {
    script.config.validate()?;

    let mut carousel = Carousel::new(RecordingHost::new(), script.config.clone(), script.slides);
    carousel.set_item_width(script.item_width);

    let mut steps = Vec::with_capacity(script.events.len());
    for event in &script.events {
        let suppress_default = apply(&mut carousel, event);
        let emitted = carousel.host_mut().take_events();
        steps.push(ReplayStep {
            event: event.clone(),
            suppress_default,
            emitted,
        });
    }

    debug!(steps = steps.len(), "replay complete");
    Ok(ReplayReport {
        steps,
        current: carousel.current(),
        frame: carousel.frame(),
    })
}

fn apply<H: CarouselHost>(carousel: &mut Carousel<H>, event: &ReplayEvent) -> bool {
    match *event {
        ReplayEvent::PointerDown { x, y, touch } => {
            return carousel.on_pointer_down(x, y, touch).suppresses_default();
        }
        ReplayEvent::PointerMove { x, y } => {
            return carousel.on_pointer_move(x, y).suppresses_default();
        }
        ReplayEvent::PointerUp => carousel.on_pointer_up(),
        ReplayEvent::PointerLeave => carousel.on_pointer_leave_or_cancel(),
        ReplayEvent::Settled => carousel.on_transition_settled(),
        ReplayEvent::MoveTo { position, animate } => carousel.move_to(position, animate),
        ReplayEvent::Previous => carousel.on_previous(),
        ReplayEvent::Next => carousel.on_next(),
        ReplayEvent::PipSelected { index } => carousel.on_pip_selected(index),
        ReplayEvent::SetItemWidth { px } => carousel.set_item_width(px),
        ReplayEvent::SetSlideCount { count } => carousel.set_slide_count(count),
        ReplayEvent::SetControlledIndex { index } => carousel.set_controlled_index(index),
    }
    false
}
