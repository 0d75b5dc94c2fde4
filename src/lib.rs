//! Carousel navigation engine.
//!
//! Maintains an always-valid previous/current/next rendering window over N
//! slides, turns pointer and touch gestures into discrete slide transitions,
//! and keeps an externally controlled index in sync with gesture-driven
//! navigation. Rendering, animation and listener registration are delegated
//! to a [`CarouselHost`].
//!
//! ```ignore
//! use carousel_engine::{Carousel, EngineConfig};
//!
//! let mut carousel = Carousel::new(host, EngineConfig::default(), slides.len());
//! carousel.set_item_width(measured_width);
//!
//! // pointer events from the platform
//! carousel.on_pointer_down(x, y, false);
//! carousel.on_pointer_move(x2, y2);
//! carousel.on_pointer_up();
//!
//! // later, when the render sink's transition ends
//! carousel.on_transition_settled();
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod host;
pub mod index;
pub mod input;
pub mod replay;
pub mod types;

pub use config::EngineConfig;
pub use engine::{Carousel, PointerResponse};
pub use error::{CarouselError, CarouselResult};
pub use host::{CarouselHost, ListenerGuard};
pub use index::{IndexTriple, compute_triple, wrap};
pub use types::{Direction, Frame, OffsetRequest, SlideProps, SlideRole, TransitionState};
