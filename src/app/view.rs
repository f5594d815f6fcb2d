// SPDX-License-Identifier: MPL-2.0
//! Frame assembly: navbar above the page scrollable, lightbox on top.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::ui::{gallery as gallery_view, navbar, page};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{Column, Id, Scrollable, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(&navbar::ViewContext {
            active: self.tracker.active(),
        })
        .map(Message::Navbar);

        let page = page::view(&page::ViewContext {
            reveals: &self.reveals,
            counters: &self.counters,
            gallery: &self.gallery,
            now: self.now,
        })
        .map(Message::Page);

        let scrollable = Scrollable::new(page)
            .id(Id::new(PAGE_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Vertical(Scrollbar::default()))
            .on_scroll(|viewport: Viewport| Message::Scrolled {
                offset: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            });

        let base = Column::new().push(navbar).push(scrollable);

        match gallery_view::lightbox(&self.gallery) {
            Some(overlay) => Stack::new()
                .push(base)
                .push(overlay.map(|m| Message::Page(page::Message::Gallery(m))))
                .into(),
            None => base.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;

    #[test]
    fn view_renders_without_lightbox() {
        let (app, _task) = App::new(Flags::default());
        let _element = app.view();
    }

    #[test]
    fn view_renders_with_lightbox_open() {
        let (mut app, _task) = App::new(Flags::default());
        let _task = app.update(Message::Page(crate::ui::page::Message::Gallery(
            gallery_view::Message::OpenLightbox,
        )));
        let _element = app.view();
    }
}
