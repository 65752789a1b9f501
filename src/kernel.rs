//! # HelixKernel — the cyclic position tracker
//!
//! A kernel holds one `(spiral, level)` pair and moves through it with
//! direct jumps: there is no "advance by one" primitive, because reaching
//! a level never requires visiting the levels below it.
//!
//! A kernel is a plain owned value. Callers that want several independent
//! position trackers create several kernels; callers that share one
//! across threads must serialize its transitions themselves, since each
//! transition is a read-then-write on both fields.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::HelixLevel;
use crate::Result;

/// The helix state machine: an unbounded signed spiral counter and a
/// level within it.
///
/// States are `(spiral, level)` pairs with the level statically confined
/// to the seven dimensional levels. The machine is perpetually cyclic;
/// there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelixKernel {
    spiral: i64,
    level: HelixLevel,
}

impl HelixKernel {
    /// A fresh kernel at spiral 0, level Potential.
    pub fn new() -> Self {
        Self {
            spiral: 0,
            level: HelixLevel::Potential,
        }
    }

    pub fn spiral(&self) -> i64 {
        self.spiral
    }

    pub fn level(&self) -> HelixLevel {
        self.level
    }

    /// The full position as a pair.
    pub fn state(&self) -> (i64, HelixLevel) {
        (self.spiral, self.level)
    }

    /// Jump directly to a level, in one step, with no intermediate
    /// states visited. The spiral is unchanged.
    ///
    /// Fails with [`crate::Error::OutOfRange`] outside `0..=6`; the
    /// kernel is left untouched on failure.
    pub fn invoke(&mut self, level: i64) -> Result<HelixLevel> {
        let level = HelixLevel::from_ordinal(level)?;
        self.invoke_level(level);
        Ok(level)
    }

    /// Typed variant of [`invoke`](Self::invoke) — cannot fail.
    pub fn invoke_level(&mut self, level: HelixLevel) {
        trace!(spiral = self.spiral, level = %level, "invoke");
        self.level = level;
    }

    /// The current Whole becomes the next spiral's Potential:
    /// `spiral += 1, level = Potential`.
    ///
    /// Unconditional: the kernel does not need to be at Whole first.
    /// Spiraling up from any level still lands on Potential of the next
    /// spiral (always-carry semantics).
    pub fn spiral_up(&mut self) {
        self.spiral += 1;
        self.level = HelixLevel::Potential;
        trace!(spiral = self.spiral, "spiral_up");
    }

    /// The inverse carry: `spiral -= 1, level = Whole`, unconditional.
    ///
    /// Note the asymmetry: `spiral_up` then `spiral_down` returns to the
    /// original spiral at Whole, not at the level the kernel left from.
    pub fn spiral_down(&mut self) {
        self.spiral -= 1;
        self.level = HelixLevel::Whole;
        trace!(spiral = self.spiral, "spiral_down");
    }

    /// Collapse back to pure potential without leaving the current
    /// spiral: `level = Potential`, spiral unchanged.
    pub fn collapse(&mut self) {
        trace!(spiral = self.spiral, "collapse");
        self.level = HelixLevel::Potential;
    }
}

impl Default for HelixKernel {
    fn default() -> Self {
        Self::new()
    }
}
