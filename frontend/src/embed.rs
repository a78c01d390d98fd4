//! Messaging between the widget and the page embedding it.

use gloo_events::EventListener;
use gloo_utils::format::JsValueSerdeExt;
use shared::embed::{EmbedMessage, HostCommand};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, MessageEvent, Window};
use yew::prelude::*;

fn parent_frame() -> Option<Window> {
    let window = window()?;
    match window.parent() {
        Ok(Some(parent)) if !js_sys::Object::is(&parent, &window) => Some(parent),
        _ => None,
    }
}

pub fn has_parent_frame() -> bool {
    parent_frame().is_some()
}

/// Posts `message` to the parent frame. Does nothing when not framed.
pub fn post_to_parent(message: &EmbedMessage) {
    let Some(parent) = parent_frame() else {
        return;
    };

    match JsValue::from_serde(message) {
        Ok(value) => {
            if let Err(e) = parent.post_message(&value, "*") {
                log::error!("Failed to post {:?} to parent: {:?}", message, e);
            }
        }
        Err(e) => log::error!("Failed to serialize embed message: {}", e),
    }
}

/// Listens for show/hide/reset commands from the host page while `enabled`.
#[hook]
pub fn use_host_commands(enabled: bool, on_command: Callback<HostCommand>) {
    use_effect_with(enabled, move |enabled| {
        let listener = if *enabled {
            window().map(|window| {
                EventListener::new(&window, "message", move |event| {
                    let Some(event) = event.dyn_ref::<MessageEvent>() else {
                        return;
                    };
                    let command = event
                        .data()
                        .into_serde::<serde_json::Value>()
                        .ok()
                        .and_then(|value| HostCommand::from_value(&value));

                    if let Some(command) = command {
                        log::info!("Host command received: {:?}", command);
                        on_command.emit(command);
                    }
                })
            })
        } else {
            None
        };

        move || drop(listener)
    });
}
