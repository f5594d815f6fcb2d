// SPDX-License-Identifier: MPL-2.0
//! Page structure: the ordered list of top-level blocks and their anchors.

pub mod layout;

pub use layout::PageLayout;

/// Top-level page blocks, in document order.
///
/// Blocks with an [`anchor`](Section::anchor) participate in scroll-spy
/// tracking and can be scrolled to; the others only fade in. `Education` has
/// an anchor but is deliberately absent from the nav menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Stats,
    Education,
    Experience,
    Research,
    Workshops,
    Publications,
    Awards,
    Skills,
    Teaching,
    Gallery,
    Contact,
    Footer,
}

impl Section {
    /// Every block, in document order.
    pub const ALL: [Section; 14] = [
        Section::Hero,
        Section::About,
        Section::Stats,
        Section::Education,
        Section::Experience,
        Section::Research,
        Section::Workshops,
        Section::Publications,
        Section::Awards,
        Section::Skills,
        Section::Teaching,
        Section::Gallery,
        Section::Contact,
        Section::Footer,
    ];

    /// Entries of the navigation menu, in display order.
    pub const NAV_ITEMS: [Section; 5] = [
        Section::About,
        Section::Research,
        Section::Publications,
        Section::Awards,
        Section::Contact,
    ];

    /// Position in document order; indexes the reveal table.
    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Anchor id for scroll-spy tracking and nav clicks.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Hero => Some("hero"),
            Section::About => Some("about"),
            Section::Education => Some("education"),
            Section::Research => Some("research"),
            Section::Publications => Some("publications"),
            Section::Awards => Some("awards"),
            Section::Contact => Some("contact"),
            _ => None,
        }
    }

    /// Heading shown for the block (nav label for anchored sections).
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Stats => "At a Glance",
            Section::Education => "Education",
            Section::Experience => "Professional Journey",
            Section::Research => "Research Projects",
            Section::Workshops => "Expert Talks & Workshops",
            Section::Publications => "Publications",
            Section::Awards => "Awards & Recognition",
            Section::Skills => "Skills & Techniques",
            Section::Teaching => "Teaching",
            Section::Gallery => "Gallery",
            Section::Contact => "Contact",
            Section::Footer => "",
        }
    }

    /// Whether the block fades in on first view; the footer does not.
    pub fn reveals(self) -> bool {
        self != Section::Footer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_blocks_have_distinct_indices() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn nav_items_all_carry_anchors() {
        for section in Section::NAV_ITEMS {
            assert!(section.anchor().is_some());
        }
    }

    #[test]
    fn education_is_anchored_but_not_in_nav() {
        assert_eq!(Section::Education.anchor(), Some("education"));
        assert!(!Section::NAV_ITEMS.contains(&Section::Education));
    }

    #[test]
    fn anchor_ids_match_the_known_set() {
        let anchors: Vec<&str> = Section::ALL.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            [
                "hero",
                "about",
                "education",
                "research",
                "publications",
                "awards",
                "contact"
            ]
        );
    }
}
