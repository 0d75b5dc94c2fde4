//! Host-facing callbacks and the scoped listener guard.
//!
//! The engine never talks to a windowing system directly. Everything it
//! needs from the outside world goes through [`CarouselHost`]: the render
//! sink, the "slide moved" notification, and attaching the global
//! move/up/cancel listeners for the lifetime of a drag session.

use crate::types::{Direction, OffsetRequest};

/// Callbacks the engine invokes on its owner.
pub trait CarouselHost {
    /// The current slide changed as the result of navigation
    fn slide_moved(&mut self, index: usize);

    /// Render sink entry point: apply (and optionally animate to) an offset
    fn request_offset(&mut self, request: OffsetRequest);

    /// Attach move/up/cancel listeners at a scope wider than the drag surface.
    ///
    /// The returned guard detaches them when released or dropped. Hosts that
    /// route all pointer events to the engine anyway can keep the default.
    fn attach_global_listeners(&mut self) -> ListenerGuard {
        ListenerGuard::noop()
    }

    /// A directional move was committed (analytics hook)
    fn directional_move(&mut self, _direction: Direction) {}
}

/// Disposer for listeners attached during a drag session.
///
/// Runs its detach closure exactly once: on [`ListenerGuard::release`] or on
/// drop, whichever comes first.
#[must_use = "dropping the guard detaches the listeners immediately"]
pub struct ListenerGuard {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Guard with nothing to detach
    pub fn noop() -> Self {
        Self { detach: None }
    }

    /// Detach now
    pub fn release(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.detach.is_some())
            .finish()
    }
}
