// SPDX-License-Identifier: MPL-2.0
//! Message dispatch and the scroll-to-events pipeline.

use super::{App, Message, Watch, PAGE_SCROLLABLE_ID};
use crate::download;
use crate::page::Section;
use crate::ui::{gallery as gallery_view, navbar, page};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => {
                let navbar::Event::ScrollTo(section) = navbar::update(message);
                self.scroll_to(section)
            }
            Message::Page(page::Message::Gallery(message)) => {
                gallery_view::update(message, &mut self.gallery);
                Task::none()
            }
            Message::Page(page::Message::DownloadCv) => {
                Task::perform(download::pick_save_path(), Message::CvSaveDialogResult)
            }
            Message::Page(page::Message::ScrollTo(section)) => self.scroll_to(section),
            Message::Scrolled {
                offset,
                viewport_height,
            } => {
                self.apply_scroll(offset, viewport_height, Instant::now());
                Task::none()
            }
            Message::GalleryTick => {
                self.gallery.tick();
                Task::none()
            }
            Message::AnimationTick(now) => {
                self.now = now;
                self.reveals.tick(now);
                self.counters.tick(now);
                Task::none()
            }
            Message::CvSaveDialogResult(Some(path)) => {
                if let Err(err) = download::export_cv(&path) {
                    eprintln!("Failed to export CV: {err}");
                }
                Task::none()
            }
            Message::CvSaveDialogResult(None) => Task::none(),
        }
    }

    /// Folds a scroll position into entered-view events and routes each one
    /// to the state it belongs to.
    pub(super) fn apply_scroll(&mut self, offset: f32, viewport_height: f32, now: Instant) {
        self.viewport_height = viewport_height;
        self.now = now;

        for watch in self.observer.scrolled(offset, viewport_height) {
            match watch {
                Watch::Section(section) => self.tracker.entered_view(section),
                Watch::Counters => self.counters.entered_view(now, self.reduced_motion),
                Watch::Reveal(index) => {
                    self.reveals.entered_view(index, now, self.reduced_motion);
                }
            }
        }
    }

    /// Jumps the page to a section.
    ///
    /// Programmatic scrolls do not echo through `on_scroll`, so the observer
    /// is replayed at the target offset here and the clicked section is made
    /// authoritative for the nav highlight.
    pub(super) fn scroll_to(&mut self, section: Section) -> Task<Message> {
        let offset = self.layout.offset_of(section);
        self.apply_scroll(offset, self.viewport_height, Instant::now());
        self.tracker.entered_view(section);

        operation::scroll_to(
            Id::new(PAGE_SCROLLABLE_ID),
            AbsoluteOffset { x: 0.0, y: offset },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::content;
    use std::time::Duration;

    fn app() -> App {
        let (app, _task) = App::new(Flags::default());
        app
    }

    #[test]
    fn scrolling_to_a_section_moves_the_highlight() {
        let mut app = app();
        let offset = app.layout.offset_of(Section::Research);
        app.apply_scroll(offset, 760.0, Instant::now());
        assert_eq!(app.tracker.active(), Section::Research);
    }

    #[test]
    fn nav_click_sets_the_highlight_directly() {
        let mut app = app();
        let _task = app.update(Message::Navbar(navbar::Message::NavClicked(
            Section::Publications,
        )));
        assert_eq!(app.tracker.active(), Section::Publications);
    }

    #[test]
    fn counters_start_when_the_stats_row_scrolls_in() {
        let mut app = app();
        let (top, _height) = app.layout.span(Section::Stats);
        app.apply_scroll(top, 760.0, Instant::now());
        assert!(app.counters.any_animating());
    }

    #[test]
    fn counters_finish_at_the_exact_target_text() {
        let mut app = app();
        let start = Instant::now();
        let (top, _height) = app.layout.span(Section::Stats);
        app.apply_scroll(top, 760.0, start);

        let _task = app.update(Message::AnimationTick(start + Duration::from_millis(2000)));

        for (i, stat) in content::STATS.iter().enumerate() {
            assert_eq!(
                app.counters.text(i),
                format!("{}{}", stat.target, stat.suffix)
            );
        }
    }

    #[test]
    fn gallery_tick_advances_the_carousel() {
        let mut app = app();
        let _task = app.update(Message::GalleryTick);
        assert_eq!(app.gallery.index(), 1);
    }

    #[test]
    fn lightbox_image_survives_timer_ticks() {
        let mut app = app();
        let _task = app.update(Message::Page(page::Message::Gallery(
            gallery_view::Message::OpenLightbox,
        )));
        let captured = app.gallery.lightbox_image();
        let _task = app.update(Message::GalleryTick);
        assert_eq!(app.gallery.lightbox_image(), captured);
        assert_ne!(app.gallery.current_image(), captured);
    }

    #[test]
    fn scrolling_back_up_does_not_restart_reveals() {
        let mut app = app();
        let start = Instant::now();
        let (top, _height) = app.layout.span(Section::About);
        app.apply_scroll(top, 760.0, start);

        let settled = start + Duration::from_millis(600);
        let _task = app.update(Message::AnimationTick(settled));
        assert_eq!(app.reveals.opacity(Section::About.index(), settled), 1.0);

        // Scroll far away and back; opacity stays settled.
        app.apply_scroll(app.layout.total_height(), 760.0, settled);
        app.apply_scroll(top, 760.0, settled);
        assert_eq!(app.reveals.opacity(Section::About.index(), settled), 1.0);
    }
}
