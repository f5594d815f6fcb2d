// SPDX-License-Identifier: MPL-2.0
//! Easing curves for the reveal and counter animations.

/// Easing function applied to a normalized progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseOutQuart,
}

impl Easing {
    /// Applies the curve to `t`, clamped to the 0.0–1.0 range.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_is_identity() {
        assert_abs_diff_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_abs_diff_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_abs_diff_eq!(Easing::Linear.apply(1.0), 1.0);
    }

    #[test]
    fn ease_out_curves_reach_endpoints() {
        for easing in [Easing::EaseOutCubic, Easing::EaseOutQuart] {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn ease_out_quart_is_past_halfway_at_midpoint() {
        // 1 - (1 - 0.5)^4 = 0.9375
        assert_abs_diff_eq!(Easing::EaseOutQuart.apply(0.5), 0.9375);
    }

    #[test]
    fn progress_outside_range_is_clamped() {
        assert_abs_diff_eq!(Easing::EaseOutQuart.apply(-1.0), 0.0);
        assert_abs_diff_eq!(Easing::EaseOutQuart.apply(2.0), 1.0);
    }

    #[test]
    fn ease_out_quart_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=100 {
            let eased = Easing::EaseOutQuart.apply(step as f32 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }
}
