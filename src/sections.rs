use portfolio_core::catalog::{
    BlogPost, ExperienceEntry, ProjectEntry, SocialLink, ABOUT_PARAGRAPHS, BLOG_POSTS, EXPERIENCE,
    PROFILE, PROJECTS, SOCIAL_LINKS,
};
use portfolio_core::SectionId;
use yew::prelude::*;

use crate::website_preview::{WebsitePreview, WebsitePreviewProps};

const EXTERNAL_ARROW_PATH: &str = "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14";

fn external_arrow() -> Html {
    html! {
        <svg class="external-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={EXTERNAL_ARROW_PATH} />
        </svg>
    }
}

fn tag_list(tags: &[&'static str]) -> Html {
    if tags.is_empty() {
        return html! {};
    }
    html! {
        <ul class="tag-list">
            { for tags.iter().map(|tag| html! { <li class="tag">{ *tag }</li> }) }
        </ul>
    }
}

fn section_heading(id: SectionId) -> Html {
    html! { <h2 class="section-heading">{ id.heading() }</h2> }
}

fn social_link(link: &SocialLink) -> Html {
    if link.opens_new_tab() {
        html! {
            <a href={link.href} target="_blank" rel="noopener noreferrer">
                { link.label }
            </a>
        }
    } else {
        html! {
            <a href={link.href}>{ link.label }</a>
        }
    }
}

#[function_component(SocialLinks)]
pub(crate) fn social_links() -> Html {
    html! {
        <div class="social-links">
            { for SOCIAL_LINKS.iter().map(social_link) }
        </div>
    }
}

#[function_component(ProfileIntro)]
pub(crate) fn profile_intro() -> Html {
    html! {
        <>
            <h1 class="profile-name">{ PROFILE.name }</h1>
            <p class="profile-title">{ PROFILE.title }</p>
            <p class="profile-tagline">{ PROFILE.tagline }</p>
        </>
    }
}

fn about_paragraph(paragraph: &'static str) -> Html {
    html! {
        <p class="body-text">
            { for paragraph.lines().enumerate().map(|(index, line)| html! {
                <>
                    if index > 0 {
                        <br />
                    }
                    { line }
                </>
            }) }
        </p>
    }
}

#[function_component(AboutSection)]
pub(crate) fn about_section() -> Html {
    let id = SectionId::About;
    html! {
        <section id={id.dom_id()} class="page-section">
            { section_heading(id) }
            { for ABOUT_PARAGRAPHS.iter().map(|paragraph| about_paragraph(paragraph)) }
        </section>
    }
}

fn experience_card(entry: &ExperienceEntry) -> Html {
    html! {
        <a class="card-link" href={entry.href} target="_blank" rel="noopener noreferrer">
            <article class="card">
                <p class="card-period">{ entry.period }</p>
                <div class="card-body">
                    <h3 class="card-title">
                        <span>{ entry.role }</span>
                        <span class="card-separator">{ "·" }</span>
                        <span>{ entry.company }</span>
                        { external_arrow() }
                    </h3>
                    if let Some(subtitle) = entry.subtitle {
                        <p class="card-subtitle">{ subtitle }</p>
                    }
                    <p class="card-summary">{ entry.summary }</p>
                    { tag_list(entry.tags) }
                </div>
            </article>
        </a>
    }
}

#[function_component(ExperienceSection)]
pub(crate) fn experience_section() -> Html {
    let id = SectionId::Experience;
    html! {
        <section id={id.dom_id()} class="page-section">
            { section_heading(id) }
            { for EXPERIENCE.iter().map(experience_card) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ResumeLinkProps {
    pub(crate) href: AttrValue,
}

#[function_component(ResumeLink)]
pub(crate) fn resume_link(props: &ResumeLinkProps) -> Html {
    html! {
        <section class="page-section resume">
            <a class="resume-link" href={props.href.clone()} target="_blank" rel="noopener noreferrer">
                { "View Full Resume" }
                { external_arrow() }
            </a>
        </section>
    }
}

fn project_card(entry: &ProjectEntry) -> Html {
    let preview = WebsitePreviewProps::from_catalog(&entry.preview);
    html! {
        <a class="card-link" href={entry.href} target="_blank" rel="noopener noreferrer">
            <article class="card">
                <div class="card-media">
                    <WebsitePreview ..preview />
                </div>
                <div class="card-body">
                    <h3 class="card-title">
                        <span>{ entry.title }</span>
                        { external_arrow() }
                    </h3>
                    <p class="card-summary">{ entry.summary }</p>
                    { tag_list(entry.tags) }
                </div>
            </article>
        </a>
    }
}

#[function_component(ProjectsSection)]
pub(crate) fn projects_section() -> Html {
    let id = SectionId::Projects;
    html! {
        <section id={id.dom_id()} class="page-section">
            { section_heading(id) }
            { for PROJECTS.iter().map(project_card) }
        </section>
    }
}

fn blog_card(post: &BlogPost) -> Html {
    let preview = WebsitePreviewProps::from_catalog(&post.preview);
    html! {
        <a class="card-link" href={post.href} target="_blank" rel="noopener noreferrer">
            <article class="card">
                <div class="card-media">
                    <WebsitePreview ..preview />
                </div>
                <div class="card-body">
                    <h3 class="card-title">
                        <span>{ post.title }</span>
                        { external_arrow() }
                    </h3>
                    <p class="card-summary">{ post.summary }</p>
                    <p class="card-meta">
                        <span>{ post.published }</span>
                        <span>{ "•" }</span>
                        <span>{ post.read_time }</span>
                    </p>
                </div>
            </article>
        </a>
    }
}

#[function_component(BlogSection)]
pub(crate) fn blog_section() -> Html {
    let id = SectionId::Blog;
    html! {
        <section id={id.dom_id()} class="page-section">
            { section_heading(id) }
            { for BLOG_POSTS.iter().map(blog_card) }
        </section>
    }
}
