use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use portfolio_core::{
    measure, ActiveSection, ObserverConfig, Rect, ScrollTarget, SectionId, SectionVisibility,
    Viewport, SECTIONS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};
use yew::prelude::*;

type ReportHook = Rc<dyn Fn(&[SectionVisibility])>;

/// Active section as seen by rendering (`state`) and by long-lived callbacks (`live`).
#[derive(Clone)]
pub(crate) struct ActiveSectionStore {
    state: UseStateHandle<SectionId>,
    live: Rc<RefCell<ActiveSection>>,
}

impl ActiveSectionStore {
    pub(crate) fn current(&self) -> SectionId {
        *self.state
    }

    pub(crate) fn observe(&self, entries: &[SectionVisibility]) {
        let next = {
            let mut live = self.live.borrow_mut();
            if !live.observe(entries) {
                return;
            }
            live.current()
        };
        self.state.set(next);
    }

    pub(crate) fn navigate(&self, id: SectionId) -> ScrollTarget {
        let target = self.live.borrow_mut().navigate(id);
        self.state.set(id);
        target
    }
}

#[hook]
pub(crate) fn use_active_section(initial: SectionId) -> ActiveSectionStore {
    let state = use_state(|| initial);
    let live = use_mut_ref(|| ActiveSection::new(initial));
    ActiveSectionStore { state, live }
}

/// Observes the page sections for as long as the calling component is mounted.
#[hook]
pub(crate) fn use_section_spy(store: ActiveSectionStore, config: ObserverConfig) {
    use_effect_with((), move |_| {
        let on_report: ReportHook =
            Rc::new(move |entries: &[SectionVisibility]| store.observe(entries));
        let spy = SectionSpy::attach(config, on_report);
        move || drop(spy)
    });
}

enum SectionSpy {
    Observer { _observer: SectionObserver },
    Scroll { _spy: ScrollSpy },
    Detached,
}

impl SectionSpy {
    fn attach(config: ObserverConfig, on_report: ReportHook) -> Self {
        let Some(window) = web_sys::window() else {
            return SectionSpy::Detached;
        };
        let Some(document) = window.document() else {
            return SectionSpy::Detached;
        };
        let sections = section_elements(&document);
        if !supports_intersection_observer(&window) {
            gloo::console::log!("IntersectionObserver unavailable, tracking sections on scroll");
            let spy = ScrollSpy::attach(window, sections, config, on_report);
            return SectionSpy::Scroll { _spy: spy };
        }
        match SectionObserver::attach(&sections, &config, on_report) {
            Ok(observer) => SectionSpy::Observer {
                _observer: observer,
            },
            Err(err) => {
                gloo::console::warn!("section observer failed", err);
                SectionSpy::Detached
            }
        }
    }
}

impl Drop for SectionSpy {
    fn drop(&mut self) {
        if !matches!(self, SectionSpy::Detached) {
            gloo::console::log!("section tracking released");
        }
    }
}

fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn section_elements(document: &Document) -> Vec<(SectionId, Element)> {
    SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.dom_id());
            if element.is_none() {
                gloo::console::warn!("section element missing", section.dom_id());
            }
            element.map(|element| (*section, element))
        })
        .collect()
}

/// Owns the browser observer and its callback; dropping it disconnects both.
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    fn attach(
        sections: &[(SectionId, Element)],
        config: &ObserverConfig,
        on_report: ReportHook,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let reports: Vec<SectionVisibility> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| report_from_entry(&entry))
                    .collect();
                on_report(&reports);
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.root_margin());
        options.set_threshold(&JsValue::from_f64(config.threshold()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for (_, element) in sections {
            observer.observe(element);
        }
        gloo::console::log!("section observer attached", sections.len());
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn report_from_entry(entry: &IntersectionObserverEntry) -> Option<SectionVisibility> {
    let target_id = entry.target().id();
    match SectionId::from_dom_id(&target_id) {
        Ok(id) => Some(SectionVisibility::new(
            id,
            entry.intersection_ratio(),
            entry.is_intersecting(),
        )),
        Err(err) => {
            gloo::console::warn!("ignoring observer entry", err.to_string());
            None
        }
    }
}

/// Geometric fallback for browsers without `IntersectionObserver`.
struct ScrollSpy {
    _scroll: EventListener,
    _resize: EventListener,
}

impl ScrollSpy {
    fn attach(
        window: Window,
        sections: Vec<(SectionId, Element)>,
        config: ObserverConfig,
        on_report: ReportHook,
    ) -> Self {
        let measure_all: Rc<dyn Fn()> = {
            let window = window.clone();
            Rc::new(move || {
                let reports = measure_sections(&window, &sections, &config);
                on_report(&reports);
            })
        };
        measure_all();
        let on_scroll = measure_all.clone();
        let scroll = EventListener::new(&window, "scroll", move |_| on_scroll());
        let on_resize = measure_all;
        let resize = EventListener::new(&window, "resize", move |_| on_resize());
        Self {
            _scroll: scroll,
            _resize: resize,
        }
    }
}

fn measure_sections(
    window: &Window,
    sections: &[(SectionId, Element)],
    config: &ObserverConfig,
) -> Vec<SectionVisibility> {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let viewport = Viewport::new(width, height);
    sections
        .iter()
        .map(|(id, element)| {
            let bounds = element.get_bounding_client_rect();
            let rect = Rect::new(bounds.top(), bounds.left(), bounds.width(), bounds.height());
            measure(*id, rect, viewport, config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use js_sys::Date;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    type Reports = Rc<RefCell<Vec<Vec<SectionVisibility>>>>;

    fn recorder() -> (Reports, ReportHook) {
        let reports: Reports = Rc::new(RefCell::new(Vec::new()));
        let hook: ReportHook = {
            let reports = reports.clone();
            Rc::new(move |entries: &[SectionVisibility]| {
                reports.borrow_mut().push(entries.to_vec());
            })
        };
        (reports, hook)
    }

    fn pinned_section(id: SectionId, top: f64) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let element = document.create_element("section").expect("create section");
        element.set_id(id.dom_id());
        element
            .set_attribute(
                "style",
                &format!("position: fixed; left: 0; top: {top}px; width: 100px; height: 100px;"),
            )
            .expect("style section");
        document
            .body()
            .expect("body available")
            .append_child(&element)
            .expect("append section");
        element
    }

    fn saw_intersecting(reports: &Reports, id: SectionId) -> bool {
        reports
            .borrow()
            .iter()
            .flatten()
            .any(|entry| entry.id == id && entry.intersecting)
    }

    async fn wait_for<F>(label: &str, mut check: F)
    where
        F: FnMut() -> bool,
    {
        let start = Date::now();
        loop {
            if check() {
                return;
            }
            if Date::now() - start > 5000.0 {
                panic!("{label} not reached after 5s");
            }
            TimeoutFuture::new(10).await;
        }
    }

    #[wasm_bindgen_test(async)]
    async fn observer_entries_reach_the_report_hook_until_dropped() {
        let visible = pinned_section(SectionId::Experience, 0.0);
        let hidden = pinned_section(SectionId::Blog, 100_000.0);
        let sections = vec![
            (SectionId::Experience, visible.clone()),
            (SectionId::Blog, hidden.clone()),
        ];
        let (reports, hook) = recorder();
        let observer = SectionObserver::attach(&sections, &ObserverConfig::default(), hook)
            .expect("observer attached");
        wait_for("experience reported", || {
            saw_intersecting(&reports, SectionId::Experience)
        })
        .await;
        assert!(!saw_intersecting(&reports, SectionId::Blog));
        let mut store = ActiveSection::new(SectionId::About);
        for batch in reports.borrow().iter() {
            store.observe(batch);
        }
        assert_eq!(store.current(), SectionId::Experience);

        drop(observer);
        let delivered = reports.borrow().len();
        hidden
            .set_attribute("style", "position: fixed; left: 0; top: 0; width: 100px; height: 100px;")
            .expect("move section");
        TimeoutFuture::new(200).await;
        assert_eq!(reports.borrow().len(), delivered);

        visible.remove();
        hidden.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn scroll_fallback_measures_on_events_until_dropped() {
        let window = web_sys::window().expect("window available");
        let visible = pinned_section(SectionId::Projects, 0.0);
        let (reports, hook) = recorder();
        let spy = ScrollSpy::attach(
            window.clone(),
            vec![(SectionId::Projects, visible.clone())],
            ObserverConfig::default(),
            hook,
        );
        assert_eq!(reports.borrow().len(), 1);
        assert!(saw_intersecting(&reports, SectionId::Projects));

        let scroll = Event::new("scroll").expect("scroll event");
        window.dispatch_event(&scroll).expect("dispatch scroll");
        let resize = Event::new("resize").expect("resize event");
        window.dispatch_event(&resize).expect("dispatch resize");
        assert_eq!(reports.borrow().len(), 3);

        drop(spy);
        window.dispatch_event(&scroll).expect("dispatch scroll");
        assert_eq!(reports.borrow().len(), 3);

        visible.remove();
    }
}
