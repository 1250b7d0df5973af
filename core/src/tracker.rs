use crate::section::SectionId;
use crate::visibility::{most_visible, SectionVisibility};

/// Where the view should scroll after an explicit navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    PageTop,
    Section(SectionId),
}

impl ScrollTarget {
    /// The first section scrolls to the very top of the page, so the header above it stays in view.
    pub fn for_section(id: SectionId) -> Self {
        if id.is_first() {
            ScrollTarget::PageTop
        } else {
            ScrollTarget::Section(id)
        }
    }
}

/// Which section the sidebar highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSection {
    current: SectionId,
}

impl ActiveSection {
    pub fn new(initial: SectionId) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Applies one batch of visibility reports. Returns whether the active section changed.
    pub fn observe(&mut self, entries: &[SectionVisibility]) -> bool {
        let Some(next) = most_visible(entries) else {
            return false;
        };
        if next == self.current {
            return false;
        }
        self.current = next;
        true
    }

    pub fn navigate(&mut self, id: SectionId) -> ScrollTarget {
        self.current = id;
        ScrollTarget::for_section(id)
    }
}
