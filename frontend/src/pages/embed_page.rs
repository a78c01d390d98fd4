use gloo_utils::body;
use yew::prelude::*;

use crate::config::WidgetOptions;
use crate::pages::spin_wheel::SpinWheel;

const BACKDROP: &str = "w-full h-full flex items-center justify-center bg-gradient-to-br from-amber-50 via-white to-orange-100";

/// Strips the document margins so the widget fills its iframe.
#[hook]
fn use_frame_body() {
    use_effect_with((), |_| {
        let style = body().style();
        for (property, value) in [("margin", "0"), ("padding", "0"), ("overflow", "hidden"), ("width", "100%"), ("height", "100%")] {
            let _ = style.set_property(property, value);
        }
        move || {
            for property in ["margin", "padding", "overflow", "width", "height"] {
                let _ = style.remove_property(property);
            }
        }
    });
}

/// `/embed`: the full widget inside the floating launcher's iframe.
#[function_component(EmbedPage)]
pub fn embed_page() -> Html {
    use_frame_body();
    let options = use_memo((), |_| WidgetOptions {
        embedded: true,
        ..WidgetOptions::from_location()
    });

    html! {
        <div class={classes!(BACKDROP, "min-h-screen")}>
            <SpinWheel options={(*options).clone()} show_close_button={false} />
        </div>
    }
}

/// `/embed/spin-wheel`: the modal variant loaded by `<spin-wheel-embed>`.
#[function_component(SpinWheelEmbedPage)]
pub fn spin_wheel_embed_page() -> Html {
    use_frame_body();
    let options = use_memo((), |_| WidgetOptions {
        embedded: true,
        ..WidgetOptions::from_location()
    });

    html! {
        <div class="fixed inset-0 bg-transparent flex items-center justify-center md:p-6">
            <div class="relative w-full max-w-[min(680px,94vw)] h-[min(720px,88vh)] rounded-2xl shadow-2xl overflow-auto bg-white">
                <SpinWheel options={(*options).clone()} />
            </div>
        </div>
    }
}
