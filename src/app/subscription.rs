// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the gallery and the animators.

use super::Message;
use crate::ui::state::GalleryInterval;
use iced::{time, Subscription};
use std::time::Duration;

/// Auto-advance pulse for the carousel.
///
/// Always on; the rotation keeps its own schedule even while the lightbox
/// is open or the gallery is off screen.
pub fn create_gallery_subscription(interval: GalleryInterval) -> Subscription<Message> {
    time::every(interval.as_duration()).map(|_| Message::GalleryTick)
}

/// Animation frames at 60 FPS while any reveal or counter is in flight.
///
/// Suspended entirely once everything has settled, so an idle page costs
/// no wakeups.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(16)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}
