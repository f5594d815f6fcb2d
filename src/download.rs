// SPDX-License-Identifier: MPL-2.0
//! CV export: save-file dialog and writing the bundled PDF to disk.

use crate::assets;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Open a Save As dialog pre-filled with the suggested CV filename.
/// Returns `None` when the user cancels.
pub async fn pick_save_path() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Save CV As")
        .set_file_name(assets::CV_SUGGESTED_NAME)
        .add_filter("PDF Document", &["pdf"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Write the bundled CV to the chosen path.
pub fn export_cv(path: &Path) -> Result<()> {
    let bytes = assets::cv_bytes()?;
    std::fs::write(path, bytes)?;
    Ok(())
}
