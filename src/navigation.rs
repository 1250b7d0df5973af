use portfolio_core::{ScrollTarget, SectionId, SECTIONS};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

pub(crate) fn scroll_to(target: ScrollTarget) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match target {
        ScrollTarget::PageTop => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        ScrollTarget::Section(id) => {
            let Some(document) = window.document() else {
                return;
            };
            let Some(element) = document.get_element_by_id(id.dom_id()) else {
                gloo::console::warn!("navigation target missing", id.dom_id());
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SectionNavProps {
    pub(crate) active: SectionId,
    pub(crate) on_navigate: Callback<SectionId>,
}

#[function_component(SectionNav)]
pub(crate) fn section_nav(props: &SectionNavProps) -> Html {
    let items: Html = SECTIONS
        .iter()
        .map(|section| {
            let section = *section;
            let active = section == props.active;
            let onclick = {
                let on_navigate = props.on_navigate.clone();
                Callback::from(move |_: MouseEvent| on_navigate.emit(section))
            };
            html! {
                <button
                    key={section.dom_id()}
                    type="button"
                    class={classes!("nav-item", active.then_some("active"))}
                    data-section={section.dom_id()}
                    aria-current={active.then_some("true")}
                    {onclick}
                >
                    <span class="nav-indicator"></span>
                    <span class="nav-label">{ section.label() }</span>
                </button>
            }
        })
        .collect();
    html! {
        <nav class="section-nav" aria-label="Sections">
            {items}
        </nav>
    }
}
