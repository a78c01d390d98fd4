use shared::constants::RESERVATION_MINUTES;
use shared::prize_catalog::Prize;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnerBannerProps {
    pub prize: Prize,
    pub compact: bool,
    pub on_claim: Callback<()>,
}

#[function_component(WinnerBanner)]
pub fn winner_banner(props: &WinnerBannerProps) -> Html {
    let short = props.prize.short_label();
    let onclick = {
        let on_claim = props.on_claim.clone();
        Callback::from(move |_: MouseEvent| on_claim.emit(()))
    };

    html! {
        <div class="w-full space-y-4">
            if !props.compact {
                <div class={styles::BANNER_CONGRATS}>{"🎉 Congratulations! 🎉"}</div>
            }
            <div class={classes!(styles::CARD, if props.compact { "p-4" } else { "p-6" })}>
                <p class={classes!("text-gray-700", "text-center", if props.compact { "mb-2" } else { "mb-4" })}>
                    <span class={classes!("font-bold", "text-emerald-600", if props.compact { "text-lg" } else { "text-xl" })}>
                        {&props.prize.name}
                    </span>
                </p>
                <p class={classes!("text-gray-600", "text-center", if props.compact { "mb-4 text-sm" } else { "mb-6 text-sm md:text-base" })}>
                    {format!("We've reserved your {} for the next {} minutes!", short, RESERVATION_MINUTES)}
                </p>
                <button
                    {onclick}
                    class={classes!(styles::BUTTON_SUCCESS, if props.compact { "py-2 text-sm" } else { "py-4 text-base md:text-lg" })}
                >
                    {format!("Claim Your {}", short)}
                </button>
                <p class="text-xs text-gray-500 text-center mt-4">
                    {format!("Offer expires in {} minutes", RESERVATION_MINUTES)}
                </p>
            </div>
        </div>
    }
}
