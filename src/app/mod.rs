// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns every piece of interaction state: the visibility
//! observer, the scroll-spy tracker, the reveal and counter animators, and
//! the gallery rotation. The update loop folds scroll and timer messages
//! into those pieces; the view renders one frame from them.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::anim::{Counters, Reveals};
use crate::config;
use crate::content;
use crate::gallery::Gallery;
use crate::page::{PageLayout, Section};
use crate::ui::state::{GalleryInterval, SectionTracker};
use crate::ui::theming::AppTheme;
use crate::visibility::{
    ViewportObserver, COUNTER_OBSERVER, REVEAL_OBSERVER, SECTION_OBSERVER,
};
use iced::{window, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1000.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Widget id of the page scrollable, shared by the view and scroll tasks.
pub const PAGE_SCROLLABLE_ID: &str = "portfolio-page";

/// One registered visibility concern.
///
/// A single observer carries all three concerns; the key says which piece
/// of state an entered-view event belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Watch {
    /// Scroll-spy tracking for an anchored section.
    Section(Section),
    /// The stats row; starts every counter at once.
    Counters,
    /// Fade-in reveal for the block at this document index.
    Reveal(usize),
}

/// Root Iced application state.
pub struct App {
    /// Resolved once at startup; System mode queries the OS exactly then.
    theme: Theme,
    reduced_motion: bool,
    gallery_interval: GalleryInterval,
    layout: PageLayout,
    observer: ViewportObserver<Watch>,
    tracker: SectionTracker,
    reveals: Reveals,
    counters: Counters,
    gallery: Gallery,
    viewport_height: f32,
    /// Timestamp of the latest animation frame, used when rendering.
    now: Instant,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot, so the one-shot flags live in a cell
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and launch flags, registers
    /// every visibility target, and reports the initial viewport so blocks
    /// already on screen fire their entered-view events before first render.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        }
        .unwrap_or_else(|err| {
            eprintln!("Failed to load config: {err}");
            config::Config::default()
        });

        let reduced_motion = flags.reduced_motion || config.reduced_motion.unwrap_or(false);
        let gallery_interval = GalleryInterval::new(
            config
                .gallery_interval_secs
                .unwrap_or(config::DEFAULT_GALLERY_INTERVAL_SECS),
        );

        let mut app = App {
            theme: AppTheme::new(config.theme_mode.unwrap_or_default()).iced_theme(),
            reduced_motion,
            gallery_interval,
            layout: PageLayout::new(),
            observer: ViewportObserver::new(),
            tracker: SectionTracker::new(),
            reveals: Reveals::new(Section::ALL.len()),
            counters: Counters::new(content::STATS.map(|s| (s.target, s.suffix))),
            gallery: Gallery::new(crate::assets::GALLERY_IMAGES.to_vec()),
            viewport_height: WINDOW_DEFAULT_HEIGHT,
            now: Instant::now(),
        };

        app.register_watches();
        app.apply_scroll(0.0, WINDOW_DEFAULT_HEIGHT, app.now);

        (app, Task::none())
    }

    /// Registers all visibility targets in document order.
    fn register_watches(&mut self) {
        for section in Section::ALL {
            let (top, height) = self.layout.span(section);

            if section.anchor().is_some() {
                self.observer
                    .observe(Watch::Section(section), top, height, SECTION_OBSERVER);
            }
            if section == Section::Stats {
                self.observer
                    .observe(Watch::Counters, top, height, COUNTER_OBSERVER);
            }
            if section.reveals() {
                self.observer
                    .observe(Watch::Reveal(section.index()), top, height, REVEAL_OBSERVER);
            }
        }
    }

    fn title(&self) -> String {
        format!("{} · Portfolio", content::NAME)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let gallery_sub = subscription::create_gallery_subscription(self.gallery_interval);
        let animation_sub = subscription::create_animation_subscription(
            self.reveals.any_animating() || self.counters.any_animating(),
        );

        Subscription::batch([gallery_sub, animation_sub])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        let (app, _task) = App::new(Flags::default());
        app
    }

    #[test]
    fn new_fires_initial_visibility_for_blocks_on_screen() {
        let app = app();
        // The hero block fills the initial viewport, so its reveal started.
        assert!(app.reveals.opacity(Section::Hero.index(), app.now) < 1.0);
        assert_eq!(app.tracker.active(), Section::Hero);
    }

    #[test]
    fn reduced_motion_flag_settles_initial_reveals() {
        let (app, _task) = App::new(Flags {
            reduced_motion: true,
            ..Flags::default()
        });
        let later = app.now + Duration::from_millis(1);
        assert_eq!(app.reveals.opacity(Section::Hero.index(), later), 1.0);
    }

    #[test]
    fn counters_do_not_start_above_the_fold() {
        let app = app();
        // The stats row sits below the initial viewport.
        assert!(!app.counters.any_animating());
        assert_eq!(app.counters.text(0), "0+");
    }

    #[test]
    fn title_names_the_owner() {
        let app = app();
        assert!(app.title().contains(content::NAME));
    }

    #[test]
    fn configured_theme_mode_drives_the_cached_theme() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "theme_mode = \"dark\"\n").expect("Failed to write config");

        let (app, _task) = App::new(Flags {
            config_path: Some(path),
            ..Flags::default()
        });
        assert!(app.theme().extended_palette().is_dark);
        assert!(app.theme().palette().background.r < 0.2);
    }
}
