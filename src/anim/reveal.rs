// SPDX-License-Identifier: MPL-2.0
//! One-shot fade-in reveals for page blocks.
//!
//! A block fades in (opacity plus a small upward translate) the first time it
//! scrolls into view and stays revealed forever after. Entry is
//! one-directional: scrolling a block out of view does not un-reveal it.

use crate::anim::easing::Easing;
use std::time::{Duration, Instant};

/// Wall-clock duration of the fade-in transition.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Vertical translate applied at the start of the fade, in logical pixels.
pub const REVEAL_RISE: f32 = 16.0;

const REVEAL_EASING: Easing = Easing::EaseOutCubic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unseen,
    Animating { started: Instant },
    Done,
}

/// Reveal state of a single page block.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    phase: Phase,
}

impl Reveal {
    pub fn new() -> Self {
        Self {
            phase: Phase::Unseen,
        }
    }

    /// The block entered the viewport; idempotent after the first call.
    pub fn entered_view(&mut self, now: Instant, reduced_motion: bool) {
        if self.phase != Phase::Unseen {
            return;
        }
        self.phase = if reduced_motion {
            Phase::Done
        } else {
            Phase::Animating { started: now }
        };
    }

    /// Settles the phase; returns `true` while the fade is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Phase::Animating { started } = self.phase {
            if now.saturating_duration_since(started) >= REVEAL_DURATION {
                self.phase = Phase::Done;
                return false;
            }
            return true;
        }
        false
    }

    /// Eased opacity in 0.0–1.0 at `now`.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Unseen => 0.0,
            Phase::Done => 1.0,
            Phase::Animating { started } => {
                let elapsed = now.saturating_duration_since(started);
                let progress = elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32();
                REVEAL_EASING.apply(progress)
            }
        }
    }

    /// Remaining upward translate at `now`; zero once revealed.
    pub fn rise(&self, now: Instant) -> f32 {
        (1.0 - self.opacity(now)) * REVEAL_RISE
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

/// Reveal states for every page block, indexed by block position.
#[derive(Debug, Clone)]
pub struct Reveals {
    items: Vec<Reveal>,
}

impl Reveals {
    pub fn new(count: usize) -> Self {
        Self {
            items: vec![Reveal::new(); count],
        }
    }

    pub fn entered_view(&mut self, index: usize, now: Instant, reduced_motion: bool) {
        if let Some(reveal) = self.items.get_mut(index) {
            reveal.entered_view(now, reduced_motion);
        }
    }

    /// Advances every running fade. Returns `true` while any still runs.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut running = false;
        for reveal in &mut self.items {
            running |= reveal.tick(now);
        }
        running
    }

    pub fn any_animating(&self) -> bool {
        self.items.iter().any(Reveal::is_animating)
    }

    pub fn opacity(&self, index: usize, now: Instant) -> f32 {
        self.items.get(index).map_or(1.0, |r| r.opacity(now))
    }

    pub fn rise(&self, index: usize, now: Instant) -> f32 {
        self.items.get(index).map_or(0.0, |r| r.rise(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unseen_block_is_fully_transparent() {
        let reveal = Reveal::new();
        assert_abs_diff_eq!(reveal.opacity(Instant::now()), 0.0);
        assert_abs_diff_eq!(reveal.rise(Instant::now()), REVEAL_RISE);
    }

    #[test]
    fn reveal_completes_after_duration() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new();
        reveal.entered_view(t0, false);
        assert!(reveal.is_animating());

        assert!(reveal.tick(t0 + Duration::from_millis(300)));
        let mid = reveal.opacity(t0 + Duration::from_millis(300));
        assert!(mid > 0.0 && mid < 1.0);

        assert!(!reveal.tick(t0 + REVEAL_DURATION));
        assert_abs_diff_eq!(reveal.opacity(t0 + REVEAL_DURATION), 1.0);
        assert_abs_diff_eq!(reveal.rise(t0 + REVEAL_DURATION), 0.0);
    }

    #[test]
    fn repeat_entry_is_a_no_op() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new();
        reveal.entered_view(t0, false);
        reveal.tick(t0 + REVEAL_DURATION);

        // Block leaves and re-enters the viewport; nothing changes.
        reveal.entered_view(t0 + Duration::from_secs(5), false);
        assert!(!reveal.is_animating());
        assert_abs_diff_eq!(reveal.opacity(t0 + Duration::from_secs(6)), 1.0);
    }

    #[test]
    fn reduced_motion_reveals_instantly() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new();
        reveal.entered_view(t0, true);
        assert!(!reveal.is_animating());
        assert_abs_diff_eq!(reveal.opacity(t0), 1.0);
    }

    #[test]
    fn collection_reports_running_state() {
        let t0 = Instant::now();
        let mut reveals = Reveals::new(3);
        assert!(!reveals.any_animating());

        reveals.entered_view(1, t0, false);
        assert!(reveals.any_animating());
        assert!(reveals.tick(t0 + Duration::from_millis(100)));
        assert!(!reveals.tick(t0 + REVEAL_DURATION));

        assert_abs_diff_eq!(reveals.opacity(0, t0), 0.0);
        assert_abs_diff_eq!(reveals.opacity(1, t0 + REVEAL_DURATION), 1.0);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let t0 = Instant::now();
        let mut reveals = Reveals::new(2);
        reveals.entered_view(9, t0, false);
        assert!(!reveals.any_animating());
        assert_abs_diff_eq!(reveals.opacity(9, t0), 1.0);
    }
}
