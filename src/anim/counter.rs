// SPDX-License-Identifier: MPL-2.0
//! Visibility-driven stat counters.
//!
//! Each counter animates from 0 to its target value the first time its stat
//! card scrolls into view, easing over a fixed wall-clock window so the run
//! takes the same time at any tick rate. A counter that has finished never
//! restarts, no matter how often the card re-enters the viewport.

use crate::anim::easing::Easing;
use std::time::{Duration, Instant};

/// Wall-clock duration of a counter run.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

const COUNTER_EASING: Easing = Easing::EaseOutQuart;

/// Animation phase of a single counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not yet scrolled into view.
    Unseen,
    /// Counting up; `started` anchors the elapsed-time computation.
    Animating { started: Instant },
    /// Finished (or skipped under reduced motion); terminal.
    Done,
}

/// A single animated statistic.
#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    suffix: String,
    phase: Phase,
    text: String,
}

impl Counter {
    pub fn new(target: u32, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        Self {
            text: format!("0{}", suffix),
            target,
            suffix,
            phase: Phase::Unseen,
        }
    }

    /// The stat card entered the viewport.
    ///
    /// Only the first call has any effect. Under reduced motion the final
    /// text is written immediately and no frames are scheduled.
    pub fn entered_view(&mut self, now: Instant, reduced_motion: bool) {
        if self.phase != Phase::Unseen {
            return;
        }
        if reduced_motion {
            self.text = self.final_text();
            self.phase = Phase::Done;
        } else {
            self.phase = Phase::Animating { started: now };
        }
    }

    /// Advances the animation to `now`, rewriting the displayed text.
    ///
    /// Returns `true` while more frames are needed. On the frame where the
    /// 2000 ms window elapses the exact target text is written, guarding
    /// against eased values that never quite reach 1.0.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Phase::Animating { started } = self.phase else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started);
        let progress =
            (elapsed.as_secs_f32() / COUNTER_DURATION.as_secs_f32()).min(1.0);

        if progress >= 1.0 {
            self.text = self.final_text();
            self.phase = Phase::Done;
            return false;
        }

        let eased = COUNTER_EASING.apply(progress);
        let displayed = (f64::from(eased) * f64::from(self.target)).floor() as u32;
        self.text = format!("{}{}", displayed.min(self.target), self.suffix);
        true
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// The currently displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

impl Default for Counter {
    /// A counter with no declared target counts to 0 with an empty suffix.
    fn default() -> Self {
        Self::new(0, "")
    }
}

/// The fixed board of stat counters, indexed by stat position.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    items: Vec<Counter>,
}

impl Counters {
    pub fn new(stats: impl IntoIterator<Item = (u32, &'static str)>) -> Self {
        Self {
            items: stats
                .into_iter()
                .map(|(target, suffix)| Counter::new(target, suffix))
                .collect(),
        }
    }

    /// Marks every counter as entered; the stats row scrolls in as one block.
    pub fn entered_view(&mut self, now: Instant, reduced_motion: bool) {
        for counter in &mut self.items {
            counter.entered_view(now, reduced_motion);
        }
    }

    /// Advances all running counters. Returns `true` while any still runs.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut running = false;
        for counter in &mut self.items {
            running |= counter.tick(now);
        }
        running
    }

    pub fn any_animating(&self) -> bool {
        self.items.iter().any(Counter::is_animating)
    }

    pub fn text(&self, index: usize) -> &str {
        self.items.get(index).map_or("0", Counter::text)
    }
}
