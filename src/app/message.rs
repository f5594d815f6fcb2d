// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::ui::{navbar, page};
use std::path::PathBuf;
use std::time::Instant;

/// Messages handled by the application update loop.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    /// The page scrollable moved; offset and viewport height in logical pixels.
    Scrolled {
        offset: f32,
        viewport_height: f32,
    },
    /// Auto-advance pulse for the gallery carousel.
    GalleryTick,
    /// Animation frame while any reveal or counter is in flight.
    AnimationTick(Instant),
    /// Save As dialog closed; `None` means the user cancelled.
    CvSaveDialogResult(Option<PathBuf>),
}

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Alternate settings file, overriding the platform config directory.
    pub config_path: Option<PathBuf>,
    /// Skip entrance animations and render everything settled.
    pub reduced_motion: bool,
}
