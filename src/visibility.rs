// SPDX-License-Identifier: MPL-2.0
//! Viewport visibility observation for page blocks.
//!
//! The page is one vertical scrollable; every interested block registers its
//! span (top offset and height within the content) together with a threshold.
//! Each scroll update is folded into discrete "entered view" events: a target
//! fires when its visible fraction first crosses the threshold and fires
//! again only after it has left the viewport.
//!
//! Visibility emission is rising-edge only; one-shot semantics (reveals,
//! counters) are the consumer's responsibility.

/// Visibility criteria for one observed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the target that must be visible, 0.0–1.0. For targets
    /// taller than the effective window the fraction is measured against
    /// the window instead, so they can still reach 1.0.
    pub threshold: f32,
    /// Fraction of the viewport height trimmed off the bottom edge, used to
    /// fire section tracking before a block reaches the exact viewport edge.
    pub bottom_margin: f32,
}

/// Section tracking: 40% visible, viewport shrunk by 40% at the bottom.
pub const SECTION_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: 0.4,
    bottom_margin: 0.4,
};

/// Stat counters: fire once 30% of the stats row is visible.
pub const COUNTER_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: 0.3,
    bottom_margin: 0.0,
};

/// Fade-in reveals: fire as soon as 10% of a block is visible.
pub const REVEAL_OBSERVER: ObserverConfig = ObserverConfig {
    threshold: 0.1,
    bottom_margin: 0.0,
};

#[derive(Debug, Clone)]
struct Target<K> {
    key: K,
    top: f32,
    height: f32,
    config: ObserverConfig,
    visible: bool,
}

impl<K> Target<K> {
    fn is_visible(&self, offset: f32, viewport_height: f32) -> bool {
        let view_top = offset;
        let view_bottom = offset + viewport_height * (1.0 - self.config.bottom_margin);
        if view_bottom <= view_top {
            return false;
        }

        if self.height <= 0.0 {
            // Degenerate targets count as visible while inside the viewport.
            return self.top >= view_top && self.top < view_bottom;
        }

        let overlap =
            (self.top + self.height).min(view_bottom) - self.top.max(view_top);
        if self.config.threshold <= 0.0 {
            overlap > 0.0
        } else {
            // Cap the denominator at the window height so a target taller
            // than the window is judged by how much of the window it fills.
            let reference = self.height.min(view_bottom - view_top);
            overlap / reference >= self.config.threshold
        }
    }
}

/// Tracks registered targets against the current scroll position.
#[derive(Debug, Clone)]
pub struct ViewportObserver<K> {
    targets: Vec<Target<K>>,
}

impl<K: Copy + PartialEq> ViewportObserver<K> {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Registers `key` over the content span `[top, top + height)`.
    ///
    /// Re-registering an existing key replaces its span and resets its
    /// visibility edge.
    pub fn observe(&mut self, key: K, top: f32, height: f32, config: ObserverConfig) {
        self.unobserve(&key);
        self.targets.push(Target {
            key,
            top,
            height,
            config,
            visible: false,
        });
    }

    /// Stops observation for `key`; no further events are emitted for it.
    pub fn unobserve(&mut self, key: &K) {
        self.targets.retain(|target| target.key != *key);
    }

    /// Drops every registration; called on teardown.
    pub fn disconnect_all(&mut self) {
        self.targets.clear();
    }

    /// Folds a scroll update into entered-view events.
    ///
    /// Returns the keys that newly became visible, in registration order.
    /// Targets that stay visible do not re-fire; leaving the viewport re-arms
    /// them.
    pub fn scrolled(&mut self, offset: f32, viewport_height: f32) -> Vec<K> {
        let mut entered = Vec::new();
        for target in &mut self.targets {
            let now_visible = target.is_visible(offset, viewport_height);
            if now_visible && !target.visible {
                entered.push(target.key);
            }
            target.visible = now_visible;
        }
        entered
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<K: Copy + PartialEq> Default for ViewportObserver<K> {
    fn default() -> Self {
        Self::new()
    }
}
