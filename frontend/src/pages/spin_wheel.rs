use std::cell::RefCell;
use std::rc::{Rc, Weak};

use shared::embed::{EmbedMessage, HostCommand};
use shared::lead::LeadResponse;
use shared::prize_catalog::Prize;
use shared::spin_engine::{SpinEngine, SpinTick, WheelState};
use shared::wheel_config::WheelConfig;
use shared::wheel_layout::wheel_size_for_viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::components::{CouponDisplay, DiscountForm, SpinButton, WheelCanvas, WinnerBanner};
use crate::config::WidgetOptions;
use crate::embed::{post_to_parent, use_host_commands};
use crate::hooks::{use_auto_show, use_prize_catalog, use_viewport_width};
use crate::styles;

/// The re-armable frame callback and the id of the frame it is queued for.
#[derive(Default)]
struct FrameLoop {
    callback: Option<Closure<dyn FnMut()>>,
    pending: Option<i32>,
}

impl FrameLoop {
    fn queued(&mut self, id: i32) {
        self.pending = Some(id);
    }

    fn fired(&mut self) {
        self.pending = None;
    }

    /// Drops the callback and hands back the frame still queued for it.
    fn stop(&mut self) -> Option<i32> {
        self.callback = None;
        self.pending.take()
    }
}

type FrameHandle = Rc<RefCell<FrameLoop>>;

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    #[prop_or_default]
    pub options: WidgetOptions,
    #[prop_or_default]
    pub config: WheelConfig,
    #[prop_or(true)]
    pub show_close_button: bool,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

#[derive(Clone, PartialEq)]
enum View {
    Wheel,
    Form { discount: String },
    Coupon(LeadResponse),
}

fn request_frame(frame: &FrameHandle) {
    let state = &mut *frame.borrow_mut();
    if state.pending.is_some() {
        return;
    }
    if let (Some(window), Some(callback)) = (window(), state.callback.as_ref()) {
        if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            state.queued(id);
        }
    }
}

fn cancel_frame(frame: &FrameHandle) {
    let pending = frame.borrow_mut().stop();
    if let (Some(window), Some(id)) = (window(), pending) {
        let _ = window.cancel_animation_frame(id);
    }
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let options = &props.options;
    let embedded = options.embedded;
    let compact = options.compact;

    let catalog = use_prize_catalog(options.prizes.clone());
    let viewport_width = use_viewport_width();
    let wheel_size = wheel_size_for_viewport(viewport_width, compact);
    let auto_show = use_auto_show(options.auto_show);

    let view = use_state(|| View::Wheel);
    let winner = use_state(|| None::<Prize>);
    let wheel = use_state(WheelState::default);
    let engine = {
        let catalog = catalog.clone();
        let config = props.config.clone();
        use_mut_ref(move || SpinEngine::new(catalog, config))
    };
    let frame: FrameHandle = use_mut_ref(FrameLoop::default);

    // Resolved prizes go to the host page when framed
    {
        let engine = engine.clone();
        use_effect_with(embedded, move |embedded| {
            if *embedded {
                engine.borrow_mut().subscribe(|prize| {
                    post_to_parent(&EmbedMessage::PrizeWon { prize: prize.clone() });
                });
            }
            || ()
        });
    }

    // Keep the engine on the latest catalog
    {
        let engine = engine.clone();
        let wheel = wheel.clone();
        use_effect_with(catalog.clone(), move |catalog| {
            engine.borrow_mut().set_catalog(catalog.clone());
            wheel.set(engine.borrow().state().clone());
            || ()
        });
    }

    // Frame loop; the closure is created once and re-armed on every spin
    {
        let engine = engine.clone();
        let wheel = wheel.clone();
        let winner = winner.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            let weak: Weak<RefCell<FrameLoop>> = Rc::downgrade(&frame);
            frame.borrow_mut().callback = Some(Closure::wrap(Box::new(move || {
                let Some(frame) = weak.upgrade() else {
                    return;
                };
                frame.borrow_mut().fired();

                let tick = engine.borrow_mut().tick(js_sys::Date::now());
                wheel.set(engine.borrow().state().clone());
                match tick {
                    SpinTick::Rotating { .. } => request_frame(&frame),
                    SpinTick::Resolved { prize, .. } => winner.set(Some(prize)),
                    SpinTick::Idle => {}
                }
            }) as Box<dyn FnMut()>));
            move || cancel_frame(&frame)
        });
    }

    let on_spin = {
        let engine = engine.clone();
        let wheel = wheel.clone();
        let winner = winner.clone();
        let frame = frame.clone();
        Callback::from(move |_: MouseEvent| {
            let started = engine
                .borrow_mut()
                .trigger(js_sys::Date::now(), &mut rand::thread_rng());
            if !started {
                return;
            }
            winner.set(None);
            wheel.set(engine.borrow().state().clone());
            request_frame(&frame);
        })
    };

    let close = {
        let hide = auto_show.hide.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            hide.emit(());
            if let Some(on_close) = &on_close {
                on_close.emit(());
            }
            if embedded {
                post_to_parent(&EmbedMessage::Close);
            }
        })
    };

    let on_claim = {
        let view = view.clone();
        let winner = winner.clone();
        Callback::from(move |_: ()| {
            if let Some(prize) = (*winner).as_ref() {
                let discount = prize.claimed_discount();
                if embedded {
                    post_to_parent(&EmbedMessage::DiscountClaimed { discount: discount.clone() });
                }
                view.set(View::Form { discount });
            }
        })
    };

    let back_to_wheel = {
        let view = view.clone();
        let winner = winner.clone();
        let close = close.clone();
        let popup = compact && options.auto_show.is_some();
        Callback::from(move |_: ()| {
            winner.set(None);
            view.set(View::Wheel);
            if popup {
                close.emit(());
            }
        })
    };

    {
        let view = view.clone();
        let winner = winner.clone();
        let show = auto_show.show.clone();
        let hide = auto_show.hide.clone();
        use_host_commands(
            embedded,
            Callback::from(move |command: HostCommand| match command {
                HostCommand::Show => show.emit(()),
                HostCommand::Hide => hide.emit(()),
                HostCommand::Reset => {
                    winner.set(None);
                    view.set(View::Wheel);
                }
            }),
        );
    }

    match &*view {
        View::Form { discount } => {
            let on_success = {
                let view = view.clone();
                Callback::from(move |response: LeadResponse| view.set(View::Coupon(response)))
            };
            return html! {
                <DiscountForm discount={discount.clone()} {on_success} on_back={back_to_wheel} />
            };
        }
        View::Coupon(response) => {
            return html! {
                <CouponDisplay coupon_code={response.coupon_code.clone()} discount={response.discount.clone()} />
            };
        }
        View::Wheel => {}
    }

    if options.auto_show.is_some() && !auto_show.visible {
        return html! {};
    }

    let close_button = |class: &'static str| {
        let close = close.clone();
        html! {
            <button class={class} aria-label="Close" onclick={move |_| close.emit(())}>
                <span class="text-lg leading-none">{"×"}</span>
            </button>
        }
    };

    let content = html! {
        <main class={if compact { styles::PAGE_COMPACT } else { styles::PAGE }}>
            if !compact {
                <div class="text-center space-y-2 md:space-y-3">
                    <h1 class={styles::TITLE}>{"Spin The Wheel"}</h1>
                    <p class={styles::SUBTITLE}>{"Try your luck and win amazing prizes!"}</p>
                </div>
            }

            <div class="relative" style={format!("width: {wheel_size}px; height: {wheel_size}px;")}>
                <WheelCanvas
                    rotation={wheel.rotation_degrees}
                    size={wheel_size}
                    catalog={engine.borrow().catalog().clone()}
                    {compact}
                    config={props.config.clone()}
                />
                <SpinButton is_spinning={wheel.spinning} {wheel_size} {compact} onclick={on_spin} />
            </div>

            <div class={classes!("flex", "flex-col", "items-center", "w-full", if compact { "gap-2 max-w-xs" } else { "gap-4 md:gap-6 max-w-md" })}>
                if let Some(prize) = (*winner).clone() {
                    <WinnerBanner {prize} {compact} on_claim={on_claim} />
                }
            </div>
        </main>
    };

    if compact && options.auto_show.is_some() {
        return html! {
            <div class={styles::OVERLAY}>
                <div class={styles::MODAL}>
                    if props.show_close_button {
                        { close_button(styles::CLOSE_BUTTON) }
                    }
                    { content }
                </div>
            </div>
        };
    }

    html! {
        <div class="relative">
            if embedded && props.show_close_button {
                { close_button(styles::CLOSE_BUTTON) }
            }
            { content }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_loop_returns_queued_frame() {
        let mut frames = FrameLoop::default();
        assert_eq!(frames.stop(), None);

        frames.queued(7);
        frames.fired();
        assert_eq!(frames.pending, None);

        frames.queued(9);
        assert_eq!(frames.stop(), Some(9));
        assert_eq!(frames.stop(), None);
        assert!(frames.callback.is_none());
    }
}
