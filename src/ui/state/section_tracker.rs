// SPDX-License-Identifier: MPL-2.0
//! Tracks which page section currently owns the navigation highlight.

use crate::page::Section;

/// Keeps the most recently entered section; the navbar highlights it.
///
/// There is no "left view" transition: the highlight only moves when
/// another section crosses the visibility threshold, so exactly one
/// section is active at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTracker {
    active: Section,
}

impl SectionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Section::Hero,
        }
    }

    /// Records that a section crossed its visibility threshold.
    /// When several sections enter in the same scroll step, the last
    /// one reported wins.
    pub fn entered_view(&mut self, section: Section) {
        self.active = section;
    }

    #[must_use]
    pub fn active(self) -> Section {
        self.active
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
