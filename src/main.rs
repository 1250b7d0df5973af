mod app_router;
mod glow;
mod navigation;
mod scroll_spy;
mod sections;
mod website_preview;

use portfolio_core::{ObserverConfig, SectionId};
use yew::prelude::*;

use crate::glow::GlowLayer;
use crate::navigation::SectionNav;
use crate::sections::{
    AboutSection, BlogSection, ExperienceSection, ProfileIntro, ProjectsSection, ResumeLink,
    SocialLinks,
};

#[function_component(App)]
fn app() -> Html {
    let active = scroll_spy::use_active_section(SectionId::default());
    scroll_spy::use_section_spy(active.clone(), ObserverConfig::default());

    let on_navigate = {
        let active = active.clone();
        Callback::from(move |section: SectionId| {
            let target = active.navigate(section);
            navigation::scroll_to(target);
        })
    };
    {
        let on_navigate = on_navigate.clone();
        use_effect_with((), move |_| {
            if let Some(section) = app_router::load_initial_section() {
                on_navigate.emit(section);
            }
            || ()
        });
    }

    html! {
        <div class="page">
            <GlowLayer />
            <header class="mobile-header">
                <ProfileIntro />
                <SocialLinks />
            </header>
            <div class="layout">
                <aside class="sidebar">
                    <div class="sidebar-inner">
                        <ProfileIntro />
                        <SectionNav active={active.current()} {on_navigate} />
                        <SocialLinks />
                    </div>
                </aside>
                <main class="content">
                    <AboutSection />
                    <ExperienceSection />
                    <ResumeLink href={app_router::resume_href()} />
                    <ProjectsSection />
                    <BlogSection />
                </main>
            </div>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
