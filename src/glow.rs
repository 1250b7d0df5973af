use gloo::events::EventListener;
use portfolio_core::{PointerPosition, DEFAULT_GLOW};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

/// Tracks the pointer over the whole viewport while mounted.
#[hook]
pub(crate) fn use_pointer_position() -> PointerPosition {
    let position = use_state(PointerPosition::default);
    {
        let position = position.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let listener = EventListener::new(&window, "mousemove", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    position.set(PointerPosition::new(
                        event.client_x() as f64,
                        event.client_y() as f64,
                    ));
                }
            });
            || drop(listener)
        });
    }
    *position
}

/// Fixed background layer with a radial glow under the pointer.
#[function_component(GlowLayer)]
pub(crate) fn glow_layer() -> Html {
    let position = use_pointer_position();
    html! {
        <div
            class="glow-layer"
            aria-hidden="true"
            style={DEFAULT_GLOW.style(position)}
        />
    }
}
