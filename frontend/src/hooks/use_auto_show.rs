use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use shared::display::{is_exit_intent, scroll_threshold_reached, AutoShow, DisplayTrigger};
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, Window};
use yew::prelude::*;

pub struct UseAutoShowHandle {
    pub visible: bool,
    pub show: Callback<()>,
    pub hide: Callback<()>,
}

fn scrolled_past_threshold(window: &Window) -> bool {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.body())
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_threshold_reached(scroll_y, scroll_height, viewport)
}

/// Visibility of the widget. Without a trigger the widget starts visible;
/// otherwise the trigger reveals it once per page load.
#[hook]
pub fn use_auto_show(auto_show: Option<AutoShow>) -> UseAutoShowHandle {
    let visible = use_state(|| auto_show.is_none());
    let has_shown = use_mut_ref(|| false);

    {
        let visible = visible.clone();
        let has_shown = has_shown.clone();

        use_effect_with(auto_show, move |auto_show| {
            let mut timeout: Option<Timeout> = None;
            let mut listener: Option<EventListener> = None;

            if let Some(auto_show) = *auto_show {
                let reveal: Rc<dyn Fn()> = Rc::new(move || {
                    if !*has_shown.borrow() {
                        *has_shown.borrow_mut() = true;
                        visible.set(true);
                    }
                });

                match auto_show.trigger {
                    DisplayTrigger::Delay => {
                        let reveal = reveal.clone();
                        timeout = Some(Timeout::new(auto_show.delay_ms, move || reveal()));
                    }
                    DisplayTrigger::Immediate => reveal(),
                    DisplayTrigger::Scroll => {
                        if let Some(window) = window() {
                            let reveal = reveal.clone();
                            let target = window.clone();
                            listener = Some(EventListener::new(&target, "scroll", move |_| {
                                if scrolled_past_threshold(&window) {
                                    reveal();
                                }
                            }));
                        }
                    }
                    DisplayTrigger::Exit => {
                        if let Some(document) = window().and_then(|w| w.document()) {
                            let reveal = reveal.clone();
                            listener = Some(EventListener::new(&document, "mouseout", move |event| {
                                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                    if event.related_target().is_none()
                                        && is_exit_intent(event.client_y() as f64)
                                    {
                                        reveal();
                                    }
                                }
                            }));
                        }
                    }
                }
            }

            move || {
                drop(timeout);
                drop(listener);
            }
        });
    }

    let show = {
        let visible = visible.clone();
        Callback::from(move |_: ()| visible.set(true))
    };
    let hide = {
        let visible = visible.clone();
        Callback::from(move |_: ()| visible.set(false))
    };

    UseAutoShowHandle {
        visible: *visible,
        show,
        hide,
    }
}
