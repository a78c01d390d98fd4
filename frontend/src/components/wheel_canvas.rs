use std::f64::consts::PI;

use shared::prize_catalog::PrizeCatalog;
use shared::wheel_config::WheelConfig;
use shared::wheel_layout::WheelLayout;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const POINTER_GRADIENT: (&str, &str) = ("#ff0000", "#cc0000");
const POINTER_STROKE: &str = "#990000";
const HIGHLIGHT: &str = "rgba(255, 255, 255, 0.3)";
const HUB_BORDER: &str = "rgba(51, 51, 51, 0.3)";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub size: f64,
    pub catalog: PrizeCatalog,
    pub compact: bool,
    #[prop_or_default]
    pub config: WheelConfig,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Issues the canvas calls for one frame of `layout`.
pub fn paint(context: &CanvasRenderingContext2d, layout: &WheelLayout) {
    let (center_x, center_y) = layout.center;
    context.clear_rect(0.0, 0.0, layout.size, layout.size);

    for segment in &layout.segments {
        context.begin_path();
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, layout.radius, segment.start_angle, segment.end_angle);
        context.close_path();
        context.set_fill_style_str(&segment.color);
        context.fill();
        context.set_stroke_style_str(&layout.border_color);
        context.set_line_width(layout.border_width);
        context.stroke();

        let label = &segment.label;
        context.save();
        let _ = context.translate(label.x, label.y);
        let _ = context.rotate(label.rotation);
        context.set_fill_style_str(&layout.text_color);
        context.set_font(&label.font);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&label.text, 0.0, 0.0);
        context.restore();
    }

    // Hub
    let hub = &layout.hub;
    let gradient = context.create_radial_gradient(center_x, center_y, 0.0, center_x, center_y, hub.radius);
    context.begin_path();
    let _ = context.arc(center_x, center_y, hub.radius, 0.0, 2.0 * PI);
    match gradient {
        Ok(gradient) => {
            let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.3)");
            let _ = gradient.add_color_stop(1.0, "rgba(240, 240, 240, 0.2)");
            context.set_fill_style_canvas_gradient(&gradient);
        }
        Err(_) => context.set_fill_style_str(HIGHLIGHT),
    }
    context.fill();
    context.set_stroke_style_str(HUB_BORDER);
    context.set_line_width(hub.border_width);
    context.stroke();

    context.begin_path();
    let _ = context.arc(center_x, center_y, hub.inner_ring_radius, 0.0, 2.0 * PI);
    context.set_stroke_style_str(HIGHLIGHT);
    context.set_line_width(hub.inner_ring_width);
    context.stroke();

    // Pointer
    let pointer = &layout.pointer;
    context.begin_path();
    context.move_to(pointer.left.0, pointer.left.1);
    context.line_to(pointer.right.0, pointer.right.1);
    context.line_to(pointer.tip.0, pointer.tip.1);
    context.close_path();
    let gradient = context.create_linear_gradient(pointer.left.0, pointer.left.1, pointer.right.0, pointer.tip.1);
    let _ = gradient.add_color_stop(0.0, POINTER_GRADIENT.0);
    let _ = gradient.add_color_stop(1.0, POINTER_GRADIENT.1);
    context.set_fill_style_canvas_gradient(&gradient);
    context.fill();
    context.set_stroke_style_str(POINTER_STROKE);
    context.set_line_width(pointer.stroke_width);
    context.stroke();

    context.begin_path();
    context.move_to(pointer.highlight_left.0, pointer.highlight_left.1);
    context.line_to(pointer.highlight_right.0, pointer.highlight_right.1);
    context.line_to(pointer.highlight_tip.0, pointer.highlight_tip.1);
    context.close_path();
    context.set_fill_style_str(HIGHLIGHT);
    context.fill();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.rotation, props.size, props.catalog.clone(), props.compact, props.config.clone()),
            move |(rotation, size, catalog, compact, config)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let edge = *size as u32;
                    if canvas.width() != edge || canvas.height() != edge {
                        canvas.set_width(edge);
                        canvas.set_height(edge);
                    }
                    match context_2d(&canvas) {
                        Some(context) => {
                            let layout = WheelLayout::compute(*rotation, *size, catalog, *compact, config);
                            paint(&context, &layout);
                        }
                        None => log::error!("Canvas 2d context unavailable"),
                    }
                }
                || ()
            },
        );
    }

    let shadow = if props.compact { "drop-shadow-lg" } else { "drop-shadow-xl md:drop-shadow-2xl" };

    html! {
        <canvas
            ref={canvas_ref}
            width={props.size.to_string()}
            height={props.size.to_string()}
            class={classes!("absolute", "top-0", "left-0", "pointer-events-none", shadow)}
        />
    }
}
