// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains UI state logic separated from the main App struct,
//! following the principle of separation of concerns.

pub mod gallery_interval;
pub mod section_tracker;

// Re-export commonly used types for convenience
pub use gallery_interval::GalleryInterval;
pub use section_tracker::SectionTracker;
