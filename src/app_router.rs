use portfolio_core::catalog::RESUME_HREF;
use portfolio_core::{SectionId, SectionIdError};

/// Section named by the location hash, e.g. `#experience`.
pub(crate) fn load_initial_section() -> Option<SectionId> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    parse_section_hash(&hash)
}

pub(crate) fn parse_section_hash(hash: &str) -> Option<SectionId> {
    match SectionId::from_hash(hash) {
        Ok(section) => Some(section),
        Err(SectionIdError::Empty) => None,
        Err(err) => {
            gloo::console::warn!("ignoring location hash", err.to_string());
            None
        }
    }
}

pub(crate) fn resume_href() -> &'static str {
    if let Some(raw) = option_env!("PORTFOLIO_RESUME_URL")
        .or(option_env!("TRUNK_PUBLIC_PORTFOLIO_RESUME_URL"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed;
        }
    }
    RESUME_HREF
}
