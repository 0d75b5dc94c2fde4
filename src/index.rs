//! Index calculator - wrapped slide positions and the render triple.
//!
//! Pure functions, no state. Slide counts are `NonZeroUsize` so an empty
//! slide set cannot reach the modular arithmetic.

use serde::Serialize;
use std::num::NonZeroUsize;

/// The (previous, current, next) slide indices rendered at any moment.
///
/// For three or more slides the indices are pairwise distinct. With two
/// slides `previous == next`; with one slide all three are `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndexTriple {
    pub current: usize,
    pub previous: usize,
    pub next: usize,
}

/// Normalize `position` into `[0, count)`, wrapping negative positions.
#[inline]
pub fn wrap(position: i64, count: NonZeroUsize) -> usize {
    // Slide counts never approach i64::MAX, so the cast back is lossless.
    position.rem_euclid(count.get() as i64) as usize
}

/// Compute the triple centred on `position`.
pub fn compute_triple(position: i64, count: NonZeroUsize) -> IndexTriple {
    IndexTriple {
        current: wrap(position, count),
        previous: wrap(position - 1, count),
        next: wrap(position + 1, count),
    }
}

impl IndexTriple {
    /// Indices in render order: previous, current, next
    pub fn as_array(&self) -> [usize; 3] {
        [self.previous, self.current, self.next]
    }
}
