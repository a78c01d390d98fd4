use shared::constants::RESERVATION_MINUTES;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CouponDisplayProps {
    pub coupon_code: String,
    pub discount: String,
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<js_sys::Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await.map(|_| ())
}

#[function_component(CouponDisplay)]
pub fn coupon_display(props: &CouponDisplayProps) -> Html {
    let copied = use_state(|| false);

    let on_copy = {
        let copied = copied.clone();
        let code = props.coupon_code.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let code = code.clone();
            spawn_local(async move {
                match copy_to_clipboard(&code).await {
                    Ok(()) => copied.set(true),
                    Err(e) => log::error!("Failed to copy coupon code: {:?}", e),
                }
            });
        })
    };

    html! {
        <main class={styles::PAGE_SUCCESS}>
            <div class="text-center space-y-8 max-w-md w-full">
                <div class="space-y-4">
                    <div class="text-5xl mb-4">{"🎉"}</div>
                    <h1 class={styles::TEXT_H1}>{format!("Your {}% Discount Code!", props.discount)}</h1>
                    <p class="text-gray-600 text-lg">
                        {format!("Use this code at checkout to save {}% on your purchase.", props.discount)}
                    </p>
                </div>
                <div class={styles::CARD_COUPON}>
                    <div class="text-center space-y-6">
                        <div>
                            <p class="text-gray-500 mb-2 text-sm md:text-base">{"Your Exclusive Coupon Code"}</p>
                            <div class={styles::COUPON_CODE}>{&props.coupon_code}</div>
                            <p class="text-sm text-gray-500 mt-2">{format!("Discount: {}% off", props.discount)}</p>
                        </div>
                        <button onclick={on_copy} class={classes!(styles::BUTTON_SUCCESS, "py-4", "text-base", "md:text-lg")}>
                            {if *copied { "✅ Copied!" } else { "📋 Copy Code" }}
                        </button>
                        <div class="space-y-2">
                            <p class="text-sm text-gray-600">{"✅ Your details have been saved"}</p>
                            <p class={styles::TEXT_SMALL}>{format!("Code expires in {} minutes", RESERVATION_MINUTES)}</p>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}
