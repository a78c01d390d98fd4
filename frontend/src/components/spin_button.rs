use shared::wheel_layout::spin_button_size;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub wheel_size: f64,
    pub compact: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let size = spin_button_size(props.wheel_size, props.compact);
    let style = format!("width: {size}px; height: {size}px;");
    let border = if props.compact { "border-2" } else { "border-4" };
    let state = if props.is_spinning { "cursor-not-allowed opacity-90 animate-pulse" } else { "" };

    html! {
        <div class="absolute inset-0 flex items-center justify-center z-10">
            <div class="relative">
                <button
                    onclick={props.onclick.clone()}
                    disabled={props.is_spinning}
                    class={classes!(styles::BUTTON_SPIN, border, state)}
                    style={style}
                >
                    <div class="flex flex-col items-center justify-center">
                        if props.is_spinning {
                            <span class={if props.compact { "text-xs" } else { "text-sm md:text-base" }}>
                                {"Spinning..."}
                            </span>
                        } else {
                            <span class={if props.compact { "text-base font-black" } else { "text-xl md:text-2xl font-black" }}>
                                {"SPIN"}
                            </span>
                            if !props.compact {
                                <span class="text-base md:text-lg font-semibold">{"NOW!"}</span>
                            }
                        }
                    </div>
                </button>
                if !props.compact {
                    <div class="absolute inset-0 rounded-full border-4 border-white/30 -m-2 pointer-events-none"></div>
                    <div class="absolute inset-0 rounded-full border-4 border-white/20 -m-4 pointer-events-none"></div>
                }
            </div>
        </div>
    }
}
