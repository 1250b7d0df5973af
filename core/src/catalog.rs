use crate::preview::PreviewImage;

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Web links open in a new browsing context; `mailto:` stays in place.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ExperienceEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub subtitle: Option<&'static str>,
    pub href: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub href: &'static str,
    pub preview: PreviewImage,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct BlogPost {
    pub title: &'static str,
    pub href: &'static str,
    pub preview: PreviewImage,
    pub summary: &'static str,
    pub published: &'static str,
    pub read_time: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/portfolio_catalog.rs"));

pub fn social_link_by_label(label: &str) -> Option<&'static SocialLink> {
    let trimmed = label.trim();
    SOCIAL_LINKS
        .iter()
        .find(|link| link.label.eq_ignore_ascii_case(trimmed))
}
