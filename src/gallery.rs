// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel state machine.
//!
//! Owns the current index into the fixed, ordered image list and the modal
//! lightbox. The auto-advance timer and the manual next/previous/jump
//! controls all reduce the same index, so a manual click neither pauses nor
//! resets the timer, and the index keeps advancing while the lightbox is
//! open. All index arithmetic is modulo the list length; the index is a
//! valid position after every transition.

use std::time::Duration;

/// Interval between automatic advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(4);

/// Carousel over a fixed ordered list of image paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<&'static str>,
    index: usize,
    /// Image captured when the lightbox opened; unaffected by later index
    /// changes until the lightbox closes.
    lightbox: Option<&'static str>,
}

impl Gallery {
    pub fn new(images: impl Into<Vec<&'static str>>) -> Self {
        Self {
            images: images.into(),
            index: 0,
            lightbox: None,
        }
    }

    /// Automatic advance; identical to a manual `next`.
    pub fn tick(&mut self) {
        self.next();
    }

    /// Advances to the next image, wrapping at the end.
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    /// Steps back to the previous image, wrapping at the start.
    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    /// Selects image `i`; out-of-range values are normalized modulo the list
    /// length rather than rejected.
    pub fn jump_to(&mut self, i: usize) {
        if !self.images.is_empty() {
            self.index = i % self.images.len();
        }
    }

    /// Opens the lightbox on whichever image is current at click time.
    pub fn open_lightbox(&mut self) {
        self.lightbox = self.current_image();
    }

    /// Closes the lightbox, discarding the captured image.
    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn current_image(&self) -> Option<&'static str> {
        self.images.get(self.index).copied()
    }

    /// The image shown in the lightbox, if it is open.
    pub fn lightbox_image(&self) -> Option<&'static str> {
        self.lightbox
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGES: [&str; 4] = ["one.jpeg", "two.jpeg", "three.jpeg", "four.jpeg"];

    #[test]
    fn new_gallery_starts_at_first_image() {
        let gallery = Gallery::new(IMAGES);
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current_image(), Some("one.jpeg"));
        assert!(!gallery.is_lightbox_open());
    }

    #[test]
    fn next_wraps_around() {
        let mut gallery = Gallery::new(IMAGES);
        gallery.jump_to(3);
        gallery.next();
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn prev_wraps_around() {
        let mut gallery = Gallery::new(IMAGES);
        gallery.prev();
        assert_eq!(gallery.index(), 3);
        assert_eq!(gallery.current_image(), Some("four.jpeg"));
    }

    #[test]
    fn next_applied_len_times_is_identity() {
        for start in 0..IMAGES.len() {
            let mut gallery = Gallery::new(IMAGES);
            gallery.jump_to(start);
            for _ in 0..IMAGES.len() {
                gallery.next();
            }
            assert_eq!(gallery.index(), start);
        }
    }

    #[test]
    fn prev_applied_len_times_is_identity() {
        for start in 0..IMAGES.len() {
            let mut gallery = Gallery::new(IMAGES);
            gallery.jump_to(start);
            for _ in 0..IMAGES.len() {
                gallery.prev();
            }
            assert_eq!(gallery.index(), start);
        }
    }

    #[test]
    fn jump_to_sets_exact_index_regardless_of_prior_state() {
        let mut gallery = Gallery::new(IMAGES);
        gallery.next();
        gallery.prev();
        gallery.tick();
        for i in 0..IMAGES.len() {
            gallery.jump_to(i);
            assert_eq!(gallery.index(), i);
        }
    }

    #[test]
    fn jump_to_normalizes_out_of_range_indices() {
        let mut gallery = Gallery::new(IMAGES);
        gallery.jump_to(7);
        assert_eq!(gallery.index(), 3);
        gallery.jump_to(400);
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn lightbox_captures_image_at_open_time() {
        let mut gallery = Gallery::new(IMAGES);
        gallery.jump_to(2);
        gallery.open_lightbox();
        assert_eq!(gallery.lightbox_image(), Some("three.jpeg"));

        // The auto-advance timer keeps running behind the lightbox.
        gallery.tick();
        assert_eq!(gallery.index(), 3);
        assert_eq!(gallery.lightbox_image(), Some("three.jpeg"));

        // Closing and immediately reopening shows the now-current image.
        gallery.close_lightbox();
        assert_eq!(gallery.lightbox_image(), None);
        gallery.open_lightbox();
        assert_eq!(gallery.lightbox_image(), Some("four.jpeg"));
    }

    #[test]
    fn closing_the_lightbox_keeps_the_current_index() {
        let mut gallery = Gallery::new(IMAGES);
        gallery.jump_to(1);
        gallery.open_lightbox();
        gallery.tick();
        gallery.tick();
        gallery.close_lightbox();
        assert_eq!(gallery.index(), 3);
    }

    #[test]
    fn empty_gallery_ignores_every_transition() {
        let mut gallery = Gallery::new(Vec::new());
        gallery.next();
        gallery.prev();
        gallery.jump_to(5);
        gallery.tick();
        gallery.open_lightbox();
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current_image(), None);
        assert!(!gallery.is_lightbox_open());
    }

    #[test]
    fn rapid_mixed_input_never_leaves_valid_range() {
        let mut gallery = Gallery::new(IMAGES);
        for step in 0..1000 {
            match step % 5 {
                0 => gallery.next(),
                1 => gallery.prev(),
                2 => gallery.tick(),
                3 => gallery.jump_to(step),
                _ => {
                    gallery.open_lightbox();
                    gallery.close_lightbox();
                }
            }
            assert!(gallery.index() < IMAGES.len());
            assert!(gallery.current_image().is_some());
        }
    }
}
