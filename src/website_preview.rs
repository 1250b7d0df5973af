use portfolio_core::preview::{FALLBACK_CAPTION, FALLBACK_TITLE};
use portfolio_core::{Gradient, PreviewImage, PreviewState, DEFAULT_FALLBACK_GRADIENT, DEFAULT_PREVIEW_ALT};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct WebsitePreviewProps {
    pub(crate) image_path: AttrValue,
    #[prop_or(DEFAULT_FALLBACK_GRADIENT)]
    pub(crate) fallback: Gradient,
    #[prop_or(AttrValue::Static(DEFAULT_PREVIEW_ALT))]
    pub(crate) alt: AttrValue,
}

impl WebsitePreviewProps {
    pub(crate) fn from_catalog(preview: &PreviewImage) -> Self {
        Self {
            image_path: AttrValue::Static(preview.src),
            fallback: preview.fallback,
            alt: AttrValue::Static(preview.alt),
        }
    }
}

/// Preview thumbnail that switches to a gradient placeholder if the image fails to load.
#[function_component(WebsitePreview)]
pub(crate) fn website_preview(props: &WebsitePreviewProps) -> Html {
    let state = use_state(PreviewState::default);

    if !state.shows_image() {
        let style = format!("background: {};", props.fallback.css());
        return html! {
            <div class="preview preview-fallback" {style}>
                <div class="preview-shade"></div>
                <div class="preview-caption">
                    <div class="preview-caption-title">{ FALLBACK_TITLE }</div>
                    <div class="preview-caption-note">{ FALLBACK_CAPTION }</div>
                </div>
            </div>
        };
    }

    let onerror = {
        let state = state.clone();
        let image_path = props.image_path.clone();
        Callback::from(move |_: Event| {
            if !state.shows_image() {
                return;
            }
            gloo::console::warn!("preview image failed, showing fallback", image_path.to_string());
            state.set(state.on_load_error());
        })
    };
    html! {
        <div class="preview">
            <img
                class="preview-image"
                src={props.image_path.clone()}
                alt={props.alt.clone()}
                {onerror}
            />
            <div class="preview-overlay"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use js_sys::Date;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlImageElement};

    wasm_bindgen_test_configure!(run_in_browser);

    const PIXEL_GIF: &str =
        "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

    fn mount_preview(id: &str, props: WebsitePreviewProps) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let _app_handle =
            yew::Renderer::<WebsitePreview>::with_root_and_props(root.clone(), props).render();
        root
    }

    fn find(root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    #[wasm_bindgen_test(async)]
    async fn broken_image_switches_to_fallback() {
        let root = mount_preview(
            "preview-broken-root",
            WebsitePreviewProps {
                image_path: AttrValue::Static("/definitely-missing-preview.png"),
                fallback: Gradient::new("#F59E0B", "#EF4444"),
                alt: AttrValue::Static("Missing preview"),
            },
        );
        let start = Date::now();
        let fallback = loop {
            if let Some(fallback) = find(&root, ".preview-fallback") {
                break fallback;
            }
            if Date::now() - start > 5000.0 {
                panic!("fallback not shown after 5s");
            }
            TimeoutFuture::new(10).await;
        };
        assert!(find(&root, "img").is_none());
        let style = fallback.get_attribute("style").unwrap_or_default();
        assert!(style.contains("#F59E0B"), "{style}");
        let caption = fallback.text_content().unwrap_or_default();
        assert!(caption.contains(FALLBACK_TITLE));
        assert!(caption.contains(FALLBACK_CAPTION));

        // Terminal: later renders keep the placeholder.
        TimeoutFuture::new(50).await;
        assert!(find(&root, ".preview-fallback").is_some());
        assert!(find(&root, "img").is_none());
    }

    #[wasm_bindgen_test(async)]
    async fn loaded_image_never_falls_back() {
        let root = mount_preview(
            "preview-loaded-root",
            WebsitePreviewProps {
                image_path: AttrValue::Static(PIXEL_GIF),
                fallback: DEFAULT_FALLBACK_GRADIENT,
                alt: AttrValue::Static(DEFAULT_PREVIEW_ALT),
            },
        );
        let start = Date::now();
        loop {
            let loaded = find(&root, "img")
                .and_then(|img| img.dyn_into::<HtmlImageElement>().ok())
                .map(|img| img.complete() && img.natural_width() > 0)
                .unwrap_or(false);
            if loaded {
                break;
            }
            if Date::now() - start > 5000.0 {
                panic!("image not loaded after 5s");
            }
            TimeoutFuture::new(10).await;
        }
        TimeoutFuture::new(50).await;
        assert!(find(&root, ".preview-fallback").is_none());
        let img = find(&root, "img").expect("image still rendered");
        assert_eq!(img.get_attribute("alt").as_deref(), Some(DEFAULT_PREVIEW_ALT));
    }
}
