//! Navigation controller - the carousel engine.
//!
//! `Carousel` owns the persistent state (index triple, transition, item
//! width, open drag session) and is the only thing that mutates it. Its
//! behaviour is split across submodules, each extending `Carousel`:
//!
//! - `navigation` - moveTo, previous/next, pip jumps, canMove
//! - `gestures` - pointer down/move/up/cancel
//! - `settle` - drag release policy and transition settlement
//! - `reconcile` - slide count, item width, controlled index, config changes
//!
//! Logical index changes never happen eagerly for animated moves: the engine
//! requests an offset from the host, and advances the triple only when the
//! host reports the transition has settled.

mod gestures;
mod navigation;
mod reconcile;
mod settle;

pub use gestures::PointerResponse;

use crate::config::EngineConfig;
use crate::host::CarouselHost;
use crate::index::{IndexTriple, compute_triple};
use crate::input::{DragSession, GestureState};
use crate::types::{Frame, OffsetRequest, SlideProps, SlideRole, TransitionState};
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::debug;

/// Three-slide carousel engine driving a host `H`.
#[derive(Debug)]
pub struct Carousel<H: CarouselHost> {
    host: H,
    config: EngineConfig,
    slide_count: usize,
    /// `None` exactly when there are no slides
    triple: Option<IndexTriple>,
    transition: TransitionState,
    item_width: f32,
    session: Option<DragSession>,
    /// Target of an in-flight animated `move_to`
    pending_target: Option<usize>,
}

impl<H: CarouselHost> Carousel<H> {
    /// Create an engine over `slide_count` slides, starting at the controlled
    /// index if one is configured, otherwise at slide 0.
    pub fn new(host: H, config: EngineConfig, slide_count: usize) -> Self {
        let start = config.controlled_index.unwrap_or(0);
        let triple = NonZeroUsize::new(slide_count).map(|count| compute_triple(start as i64, count));
        debug!(slide_count, start, "carousel created");

        Self {
            host,
            config,
            slide_count,
            triple,
            transition: TransitionState::default(),
            item_width: 0.0,
            session: None,
            pending_target: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn triple(&self) -> Option<IndexTriple> {
        self.triple
    }

    /// Current slide index, if there are any slides
    pub fn current(&self) -> Option<usize> {
        self.triple.map(|t| t.current)
    }

    pub fn transition(&self) -> TransitionState {
        self.transition
    }

    pub fn is_animating(&self) -> bool {
        self.transition.animating
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Returns true while a pointer/touch session is open
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true while the open session is a confirmed horizontal drag
    pub fn is_dragging(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.gesture().is_dragging())
    }

    /// Gesture state of the open session
    pub fn gesture(&self) -> Option<&GestureState> {
        self.session.as_ref().map(DragSession::gesture)
    }

    /// Render slots and offset for the current moment; `None` with no slides.
    pub fn frame(&self) -> Option<Frame> {
        let triple = self.triple?;
        let animating = self.transition.animating;
        let is_dragging = self.is_dragging();
        let slot = |role: SlideRole, index: usize| SlideProps {
            role,
            index,
            is_active: role == SlideRole::Current,
            is_animating: animating,
            is_dragging,
        };

        Some(Frame {
            slides: [
                slot(SlideRole::Previous, triple.previous),
                slot(SlideRole::Current, triple.current),
                slot(SlideRole::Next, triple.next),
            ],
            offset_px: self.transition.offset_px,
            animating,
        })
    }

    /// Close any open session, detaching its listeners without committing.
    pub fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("teardown closed open drag session");
            session.close();
        }
    }

    /// Consume the engine and return the host. Open sessions are torn down.
    pub fn into_host(mut self) -> H {
        self.teardown();
        self.host
    }

    fn count(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.slide_count)
    }

    /// Record the requested offset and forward it to the render sink
    fn apply_offset(&mut self, offset_px: f32, animate: bool) {
        self.transition = TransitionState {
            offset_px,
            animating: animate,
        };
        let duration = if animate {
            self.config.animation_duration()
        } else {
            Duration::ZERO
        };
        self.host.request_offset(OffsetRequest {
            offset_px,
            animate,
            duration,
        });
    }

    /// Recentre the triple on `index`, snap the strip back to zero and
    /// notify the host.
    fn commit_index(&mut self, index: usize) {
        let Some(count) = self.count() else {
            return;
        };
        let triple = compute_triple(index as i64, count);
        self.triple = Some(triple);
        self.apply_offset(0.0, false);
        debug!(index = triple.current, "slide moved");
        self.host.slide_moved(triple.current);
    }
}
