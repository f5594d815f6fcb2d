// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel and lightbox views.
//!
//! The carousel shows one image at a time with overlay arrows, indicator
//! dots below, and a click-to-enlarge lightbox. All rotation state lives
//! in [`crate::gallery::Gallery`]; this module only maps widgets onto it.

use crate::assets;
use crate::gallery::Gallery;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Messages emitted by the carousel and lightbox.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Next,
    Previous,
    JumpTo(usize),
    OpenLightbox,
    CloseLightbox,
}

/// Apply a gallery message to the rotation state.
///
/// Manual navigation does not reset the auto-advance timer; the next tick
/// still fires on the subscription's own schedule.
pub fn update(message: Message, gallery: &mut Gallery) {
    match message {
        Message::Next => gallery.next(),
        Message::Previous => gallery.prev(),
        Message::JumpTo(index) => gallery.jump_to(index),
        Message::OpenLightbox => gallery.open_lightbox(),
        Message::CloseLightbox => gallery.close_lightbox(),
    }
}

/// Render the carousel: current image, overlay arrows, indicator dots.
pub fn carousel(gallery: &Gallery) -> Element<'static, Message> {
    let Some(path) = gallery.current_image() else {
        return image_or_placeholder(None, sizing::CAROUSEL_HEIGHT);
    };

    let surface = mouse_area(image_or_placeholder(Some(path), sizing::CAROUSEL_HEIGHT))
        .on_release(Message::OpenLightbox);

    let left_arrow = Container::new(
        button(Text::new("◀").size(typography::TITLE_MD))
            .padding(spacing::SM)
            .style(styles::button::carousel_arrow())
            .on_press(Message::Previous),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Center);

    let right_arrow = Container::new(
        button(Text::new("▶").size(typography::TITLE_MD))
            .padding(spacing::SM)
            .style(styles::button::carousel_arrow())
            .on_press(Message::Next),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Center);

    let stack = Stack::new()
        .push(surface)
        .push(left_arrow)
        .push(right_arrow);

    let mut dots = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for i in 0..gallery.len() {
        dots = dots.push(
            button("")
                .width(sizing::DOT_SIZE)
                .height(sizing::DOT_SIZE)
                .style(styles::button::indicator_dot(i == gallery.index()))
                .on_press(Message::JumpTo(i)),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(stack)
        .push(dots)
        .into()
}

/// Render the lightbox overlay, if open.
///
/// The enlarged image is the one captured when the lightbox was opened,
/// not the carousel's live position. Clicking anywhere closes it.
pub fn lightbox(gallery: &Gallery) -> Option<Element<'static, Message>> {
    let path = gallery.lightbox_image()?;

    let enlarged = Container::new(image_or_placeholder(Some(path), 0.0))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let backdrop = Container::new(enlarged)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::lightbox_backdrop);

    Some(mouse_area(backdrop).on_release(Message::CloseLightbox).into())
}

/// Load a bundled image, or draw a neutral placeholder when the asset is
/// missing from the bundle. A height of 0.0 means "shrink to fit".
fn image_or_placeholder(path: Option<&'static str>, height: f32) -> Element<'static, Message> {
    if let Some(handle) = path.and_then(assets::image_handle) {
        let img = image(handle).width(Length::Fill);
        if height > 0.0 {
            Container::new(img.height(height))
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .into()
        } else {
            img.into()
        }
    } else {
        let fill = if height > 0.0 {
            Length::Fixed(height)
        } else {
            Length::Fixed(sizing::CAROUSEL_HEIGHT)
        };
        Container::new(Text::new("Image unavailable").size(typography::BODY))
            .width(Length::Fill)
            .height(fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::image_placeholder)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::GALLERY_IMAGES;

    fn gallery() -> Gallery {
        Gallery::new(GALLERY_IMAGES.to_vec())
    }

    #[test]
    fn next_message_advances_the_carousel() {
        let mut g = gallery();
        update(Message::Next, &mut g);
        assert_eq!(g.index(), 1);
    }

    #[test]
    fn jump_message_selects_the_dot_index() {
        let mut g = gallery();
        update(Message::JumpTo(2), &mut g);
        assert_eq!(g.index(), 2);
    }

    #[test]
    fn lightbox_messages_open_and_close() {
        let mut g = gallery();
        update(Message::OpenLightbox, &mut g);
        assert!(g.is_lightbox_open());
        update(Message::CloseLightbox, &mut g);
        assert!(!g.is_lightbox_open());
    }

    #[test]
    fn carousel_view_renders() {
        let g = gallery();
        let _element = carousel(&g);
    }

    #[test]
    fn lightbox_view_is_absent_until_opened() {
        let mut g = gallery();
        assert!(lightbox(&g).is_none());
        update(Message::OpenLightbox, &mut g);
        assert!(lightbox(&g).is_some());
    }
}
