//! Pointer and touch input handling for the carousel.
//!
//! ## Architecture
//!
//! Input uses an explicit state machine (`GestureState`) per drag session.
//! The session is opened on pointer down, fed every motion event in delivery
//! order, and closed on up/leave/cancel.
//!
//! ## Modules
//!
//! - `state` - Gesture phase enum and per-session positions/deltas
//! - `disambiguate` - Drag vs page-scroll classification and dead zone
//! - `session` - Session lifecycle and listener ownership

mod disambiguate;
mod session;
mod state;

pub use disambiguate::{MotionVerdict, classify_motion, compensated_offset};
pub use session::{DragSession, PointerKind};
pub use state::{GesturePhase, GestureState};
