// SPDX-License-Identifier: MPL-2.0
//! How long the carousel shows each image before rotating.

use crate::config::{
    DEFAULT_GALLERY_INTERVAL_SECS, MAX_GALLERY_INTERVAL_SECS, MIN_GALLERY_INTERVAL_SECS,
};

/// Seconds between gallery auto-advances, kept inside 2–30.
///
/// Config values arrive untrusted; construction clamps them so the timer
/// subscription never sees a zero or absurdly long period.
///
/// # Example
///
/// ```
/// use iced_vitae::ui::state::GalleryInterval;
///
/// assert_eq!(GalleryInterval::new(4).value(), 4);
/// assert_eq!(GalleryInterval::new(100).value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryInterval(u64);

impl GalleryInterval {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_GALLERY_INTERVAL_SECS, MAX_GALLERY_INTERVAL_SECS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// The interval in the form `time::every` wants.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(self.0)
    }
}

impl Default for GalleryInterval {
    fn default() -> Self {
        Self(DEFAULT_GALLERY_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(GalleryInterval::new(0).value(), MIN_GALLERY_INTERVAL_SECS);
        assert_eq!(GalleryInterval::new(100).value(), MAX_GALLERY_INTERVAL_SECS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(GalleryInterval::new(2).value(), 2);
        assert_eq!(GalleryInterval::new(15).value(), 15);
        assert_eq!(GalleryInterval::new(30).value(), 30);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(
            GalleryInterval::default().value(),
            DEFAULT_GALLERY_INTERVAL_SECS
        );
    }

    #[test]
    fn as_duration_converts_correctly() {
        let interval = GalleryInterval::new(5);
        assert_eq!(interval.as_duration(), std::time::Duration::from_secs(5));
    }
}
