use std::fmt;

/// A navigable region of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    About,
    Experience,
    Projects,
    Blog,
}

pub const SECTIONS: &[SectionId] = &[
    SectionId::About,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Blog,
];

impl SectionId {
    /// Element id of the section in the rendered page.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Blog => "blog",
        }
    }

    /// Label shown in the sidebar navigation.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Work",
            SectionId::Blog => "Blog",
        }
    }

    /// Heading used for the sticky mobile section header.
    pub fn heading(self) -> String {
        self.label().to_ascii_uppercase()
    }

    pub fn is_first(self) -> bool {
        SECTIONS.first() == Some(&self)
    }

    pub fn from_dom_id(value: &str) -> Result<Self, SectionIdError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SectionIdError::Empty);
        }
        SECTIONS
            .iter()
            .copied()
            .find(|section| section.dom_id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SectionIdError::Unknown(trimmed.to_string()))
    }

    /// Parses a location hash such as `#experience`.
    pub fn from_hash(hash: &str) -> Result<Self, SectionIdError> {
        Self::from_dom_id(hash.trim().trim_start_matches('#'))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl std::str::FromStr for SectionId {
    type Err = SectionIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_dom_id(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionIdError {
    Empty,
    Unknown(String),
}

impl fmt::Display for SectionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionIdError::Empty => write!(f, "section id is empty"),
            SectionIdError::Unknown(value) => write!(f, "unknown section id '{value}'"),
        }
    }
}

impl std::error::Error for SectionIdError {}
