// SPDX-License-Identifier: MPL-2.0
//! Time-driven animation state machines.
//!
//! Everything here is pure state: the animators take the current `Instant`
//! from the message that drives them, so tests run them on a virtual clock
//! without waiting on wall time.

pub mod counter;
pub mod easing;
pub mod reveal;

pub use counter::{Counter, Counters, COUNTER_DURATION};
pub use easing::Easing;
pub use reveal::{Reveal, Reveals, REVEAL_DURATION};
