use std::collections::HashSet;

use portfolio_core::catalog::{
    social_link_by_label, ABOUT_PARAGRAPHS, BLOG_POSTS, EXPERIENCE, PROFILE, PROJECTS,
    RESUME_HREF, SOCIAL_LINKS,
};
use portfolio_core::{SectionId, SectionIdError, SECTIONS};

#[test]
fn sections_are_ordered_and_unique() {
    let ids: Vec<&str> = SECTIONS.iter().map(|section| section.dom_id()).collect();
    assert_eq!(ids, vec!["about", "experience", "projects", "blog"]);
    let labels: Vec<&str> = SECTIONS.iter().map(|section| section.label()).collect();
    assert_eq!(labels, vec!["About", "Experience", "Work", "Blog"]);
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), SECTIONS.len());
}

#[test]
fn section_ids_round_trip_through_dom_ids() {
    for section in SECTIONS {
        assert_eq!(SectionId::from_dom_id(section.dom_id()), Ok(*section));
    }
    assert_eq!("Projects".parse::<SectionId>(), Ok(SectionId::Projects));
    assert_eq!(SectionId::Projects.heading(), "WORK");
}

#[test]
fn unknown_section_ids_are_rejected() {
    assert_eq!(SectionId::from_dom_id("  "), Err(SectionIdError::Empty));
    let err = SectionId::from_dom_id("contact").unwrap_err();
    assert_eq!(err, SectionIdError::Unknown("contact".to_string()));
    assert_eq!(err.to_string(), "unknown section id 'contact'");
}

#[test]
fn hash_parsing() {
    assert_eq!(SectionId::from_hash("#experience"), Ok(SectionId::Experience));
    assert_eq!(SectionId::from_hash("blog"), Ok(SectionId::Blog));
    assert_eq!(SectionId::from_hash("#"), Err(SectionIdError::Empty));
    assert!(SectionId::from_hash("#room=abc").is_err());
}

#[test]
fn profile_and_resume_are_present() {
    assert!(!PROFILE.name.is_empty());
    assert!(!PROFILE.title.is_empty());
    assert!(!RESUME_HREF.trim().is_empty());
    assert!(!ABOUT_PARAGRAPHS.is_empty());
}

#[test]
fn mail_link_stays_in_place() {
    let email = social_link_by_label("email").expect("email link");
    assert!(email.href.starts_with("mailto:"));
    assert!(!email.opens_new_tab());
    for link in SOCIAL_LINKS.iter().filter(|link| link.href.starts_with("https://")) {
        assert!(link.opens_new_tab(), "{} should open a new tab", link.label);
    }
}

#[test]
fn previews_have_sources_and_alt_text() {
    let previews = PROJECTS
        .iter()
        .map(|entry| entry.preview)
        .chain(BLOG_POSTS.iter().map(|post| post.preview));
    for preview in previews {
        assert!(!preview.src.trim().is_empty());
        assert!(!preview.alt.trim().is_empty());
        assert!(preview.fallback.from.starts_with('#'));
        assert!(preview.fallback.to.starts_with('#'));
    }
}

#[test]
fn blog_alt_defaults_to_title() {
    for post in BLOG_POSTS {
        assert!(!post.published.is_empty());
        assert!(!post.read_time.is_empty());
    }
    if let Some(post) = BLOG_POSTS.first() {
        assert_eq!(post.preview.alt, post.title);
    }
}

#[test]
fn experience_links_are_unique() {
    let hrefs: HashSet<&str> = EXPERIENCE.iter().map(|entry| entry.href).collect();
    assert_eq!(hrefs.len(), EXPERIENCE.len());
}

#[test]
fn every_card_has_tags() {
    for entry in EXPERIENCE {
        assert!(!entry.tags.is_empty(), "{} has no tags", entry.company);
    }
    for entry in PROJECTS {
        assert!(!entry.tags.is_empty(), "{} has no tags", entry.title);
    }
    let pfizer = PROJECTS
        .iter()
        .find(|entry| entry.title == "Pfizer")
        .expect("pfizer project");
    assert_eq!(pfizer.tags, ["Figma", "UXCam", "Axure RP", "User Testing"]);
}

#[test]
fn about_paragraphs_keep_line_breaks() {
    let paragraph = ABOUT_PARAGRAPHS
        .iter()
        .find(|paragraph| paragraph.contains("Copenhagen"))
        .expect("location paragraph");
    let lines: Vec<&str> = paragraph.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Now based in Copenhagen, originally from Toronto.",
            "Native English speaker, currently learning Danish.",
        ]
    );
}
