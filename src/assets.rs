// SPDX-License-Identifier: MPL-2.0
//! Embedded static assets and their path constants.
//!
//! All images and the CV file are bundled into the binary with `rust-embed`
//! and referenced by the literal paths below. A missing asset degrades to a
//! placeholder at render time rather than failing.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[exclude = "*.md"]
pub struct Assets;

/// Gallery carousel images, in display order.
pub const GALLERY_IMAGES: [&str; 4] = [
    "images/gallery-1.jpeg",
    "images/gallery-2.jpeg",
    "images/gallery-3.jpeg",
    "images/gallery-4.jpeg",
];

/// Hero portrait.
pub const PROFILE_IMAGE: &str = "images/profile.jpeg";

/// Laboratory photograph shown in the about section.
pub const ABOUT_IMAGE: &str = "images/laboratory.jpeg";

/// Award photographs, in display order.
pub const AWARD_IMAGES: [&str; 2] = ["images/award-1.jpeg", "images/award-2.jpeg"];

/// Bundled CV document.
pub const CV_FILE: &str = "cv/curriculum_vitae.pdf";

/// Filename suggested by the CV save dialog.
pub const CV_SUGGESTED_NAME: &str = "Dr_Maya_Iyer_CV.pdf";

/// Loads an embedded image into an iced handle.
///
/// Returns `None` when the asset is not part of the bundle; callers render a
/// placeholder in that case.
pub fn image_handle(path: &str) -> Option<Handle> {
    Assets::get(path).map(|file| Handle::from_bytes(file.data.into_owned()))
}

/// Returns the raw bytes of the bundled CV document.
pub fn cv_bytes() -> Result<Vec<u8>> {
    Assets::get(CV_FILE)
        .map(|file| file.data.into_owned())
        .ok_or_else(|| Error::Asset(format!("{} is not bundled", CV_FILE)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_paths_are_distinct() {
        for (i, a) in GALLERY_IMAGES.iter().enumerate() {
            for b in GALLERY_IMAGES.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn missing_asset_yields_no_handle() {
        assert!(image_handle("images/does-not-exist.jpeg").is_none());
    }
}
