// SPDX-License-Identifier: MPL-2.0
//! Fixed vertical layout of the page.
//!
//! Every block renders at a fixed height, so the content offsets used for
//! observer registration, nav scroll targets, and the rendered containers
//! all come from this one table and agree exactly. This keeps the whole
//! interaction layer testable without a renderer.

use super::Section;

/// Rendered height of each block, in logical pixels.
pub fn block_height(section: Section) -> f32 {
    match section {
        Section::Hero => 560.0,
        Section::About => 620.0,
        Section::Stats => 360.0,
        Section::Education => 760.0,
        Section::Experience => 560.0,
        Section::Research => 980.0,
        Section::Workshops => 560.0,
        Section::Publications => 820.0,
        Section::Awards => 720.0,
        Section::Skills => 560.0,
        Section::Teaching => 640.0,
        Section::Gallery => 660.0,
        Section::Contact => 420.0,
        Section::Footer => 120.0,
    }
}

/// Cumulative block offsets within the scrollable content.
#[derive(Debug, Clone)]
pub struct PageLayout {
    offsets: Vec<f32>,
    total: f32,
}

impl PageLayout {
    pub fn new() -> Self {
        let mut offsets = Vec::with_capacity(Section::ALL.len());
        let mut cursor = 0.0;
        for section in Section::ALL {
            offsets.push(cursor);
            cursor += block_height(section);
        }
        Self {
            offsets,
            total: cursor,
        }
    }

    /// Top offset of the block within the content.
    pub fn offset_of(&self, section: Section) -> f32 {
        self.offsets[section.index()]
    }

    /// `(top, height)` span of the block.
    pub fn span(&self, section: Section) -> (f32, f32) {
        (self.offset_of(section), block_height(section))
    }

    /// Full content height.
    pub fn total_height(&self) -> f32 {
        self.total
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_block_starts_at_zero() {
        let layout = PageLayout::new();
        assert_abs_diff_eq!(layout.offset_of(Section::Hero), 0.0);
    }

    #[test]
    fn spans_are_contiguous_in_document_order() {
        let layout = PageLayout::new();
        let mut expected_top = 0.0;
        for section in Section::ALL {
            let (top, height) = layout.span(section);
            assert_abs_diff_eq!(top, expected_top);
            assert!(height > 0.0);
            expected_top = top + height;
        }
        assert_abs_diff_eq!(layout.total_height(), expected_top);
    }

    #[test]
    fn later_blocks_sit_below_earlier_ones() {
        let layout = PageLayout::new();
        assert!(layout.offset_of(Section::Contact) > layout.offset_of(Section::Research));
        assert!(layout.offset_of(Section::Research) > layout.offset_of(Section::About));
    }
}
