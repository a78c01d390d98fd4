use gloo_events::EventListener;
use web_sys::window;
use yew::prelude::*;

fn current_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0)
}

#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state(current_width);

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "resize", move |_| width.set(current_width()))
            });
            move || drop(listener)
        });
    }

    *width
}
