use yew::prelude::*;

use crate::config::WidgetOptions;
use crate::embed::has_parent_frame;
use crate::pages::spin_wheel::SpinWheel;

#[function_component(Home)]
pub fn home() -> Html {
    // Framed without `embedded=true` still talks to the host page
    let options = use_memo((), |_| {
        let options = WidgetOptions::from_location();
        WidgetOptions {
            embedded: options.embedded || has_parent_frame(),
            ..options
        }
    });

    html! {
        <SpinWheel options={(*options).clone()} />
    }
}
