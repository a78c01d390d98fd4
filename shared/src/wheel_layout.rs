//! Geometry for drawing the wheel.
//!
//! Everything here is a pure function of rotation, canvas size, catalog and
//! compact mode. The frontend walks the resulting [`WheelLayout`] and issues
//! the matching canvas calls; nothing in this module touches a drawing API.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::prize_catalog::PrizeCatalog;
use crate::wheel_config::WheelConfig;

/// Distance from the canvas top edge to the pointer's flat side.
pub const POINTER_TOP: f64 = 10.0;
/// Label anchor distance from the center, as a fraction of the radius.
pub const LABEL_RADIUS_RATIO: f64 = 0.65;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SegmentLayout {
    /// Radians, canvas convention (0 = +x, clockwise).
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
    pub label: LabelLayout,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LabelLayout {
    pub x: f64,
    pub y: f64,
    /// Radians; keeps the text upright relative to its arc.
    pub rotation: f64,
    pub text: String,
    pub font: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HubLayout {
    pub radius: f64,
    pub inner_ring_radius: f64,
    pub border_width: f64,
    pub inner_ring_width: f64,
}

/// Downward-pointing triangle anchored at the top of the canvas.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PointerLayout {
    pub left: (f64, f64),
    pub right: (f64, f64),
    pub tip: (f64, f64),
    pub highlight_left: (f64, f64),
    pub highlight_right: (f64, f64),
    pub highlight_tip: (f64, f64),
    pub stroke_width: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelLayout {
    pub size: f64,
    pub center: (f64, f64),
    pub radius: f64,
    pub border_color: String,
    pub border_width: f64,
    pub text_color: String,
    pub segments: Vec<SegmentLayout>,
    pub hub: HubLayout,
    pub pointer: PointerLayout,
}

impl WheelLayout {
    /// Lays out a square wheel `size` pixels wide turned by `rotation` degrees.
    pub fn compute(
        rotation: f64,
        size: f64,
        catalog: &PrizeCatalog,
        compact: bool,
        config: &WheelConfig,
    ) -> Self {
        let center = size / 2.0;
        let radius = (center - if compact { 10.0 } else { 20.0 }).max(0.0);
        let segment_angle = 2.0 * PI / catalog.len() as f64;
        let offset = rotation * PI / 180.0;
        let font = label_font(size);

        let segments = catalog
            .prizes()
            .iter()
            .enumerate()
            .map(|(index, prize)| {
                // Rotation is subtracted from every segment angle.
                let start_angle = index as f64 * segment_angle - offset;
                let end_angle = start_angle + segment_angle;
                let text_angle = start_angle + segment_angle / 2.0;
                let text_radius = radius * LABEL_RADIUS_RATIO;

                SegmentLayout {
                    start_angle,
                    end_angle,
                    color: prize.color.clone(),
                    label: LabelLayout {
                        x: center + text_angle.cos() * text_radius,
                        y: center + text_angle.sin() * text_radius,
                        rotation: text_angle + PI / 2.0,
                        text: truncate_label(&prize.name, size),
                        font: font.to_string(),
                    },
                }
            })
            .collect();

        let hub_radius = hub_radius(size, compact, config);
        let hub = HubLayout {
            radius: hub_radius,
            inner_ring_radius: hub_radius - if compact { 3.0 } else { 5.0 },
            border_width: config.segment_border_width,
            inner_ring_width: if compact { 1.0 } else { 2.0 },
        };

        let (half_width, tip_y) = pointer_dimensions(size, compact);
        let pointer = PointerLayout {
            left: (center - half_width, POINTER_TOP),
            right: (center + half_width, POINTER_TOP),
            tip: (center, tip_y),
            highlight_left: (center - half_width * 0.7, POINTER_TOP + 3.0),
            highlight_right: (center + half_width * 0.7, POINTER_TOP + 3.0),
            highlight_tip: (center, tip_y - 3.0),
            stroke_width: if compact { 1.0 } else { 2.0 },
        };

        Self {
            size,
            center: (center, center),
            radius,
            border_color: config.segment_border.clone(),
            border_width: config.segment_border_width,
            text_color: config.text_color.clone(),
            segments,
            hub,
            pointer,
        }
    }
}

pub fn label_font(size: f64) -> &'static str {
    if size < 350.0 {
        "bold 8px sans-serif"
    } else if size < 400.0 {
        "bold 10px sans-serif"
    } else if size < 500.0 {
        "bold 12px sans-serif"
    } else {
        "bold 16px sans-serif"
    }
}

/// Shortens long prize names on small wheels.
pub fn truncate_label(name: &str, size: f64) -> String {
    let length = name.chars().count();
    if size < 350.0 && length > 8 {
        let short: String = name.replace("% Discount", "%").chars().take(8).collect();
        format!("{}...", short)
    } else if size < 400.0 && length > 10 {
        name.replace("% Discount", "%")
    } else {
        name.to_string()
    }
}

pub fn hub_radius(size: f64, compact: bool, config: &WheelConfig) -> f64 {
    if compact {
        15.0
    } else if size < 400.0 {
        20.0
    } else if size < 500.0 {
        25.0
    } else {
        config.center_circle_radius
    }
}

/// `(half_width, tip_y)` of the pointer triangle.
pub fn pointer_dimensions(size: f64, compact: bool) -> (f64, f64) {
    if compact {
        (8.0, 25.0)
    } else if size < 400.0 {
        (12.0, 40.0)
    } else if size < 500.0 {
        (15.0, 50.0)
    } else {
        (18.0, 60.0)
    }
}

/// Canvas edge length for the current viewport.
pub fn wheel_size_for_viewport(viewport_width: f64, compact: bool) -> f64 {
    if compact || viewport_width < 640.0 {
        300.0
    } else if viewport_width < 768.0 {
        400.0
    } else {
        500.0
    }
}

/// Diameter of the round SPIN button laid over the hub.
pub fn spin_button_size(wheel_size: f64, compact: bool) -> f64 {
    if compact {
        60.0
    } else if wheel_size < 400.0 {
        80.0
    } else if wheel_size < 500.0 {
        100.0
    } else {
        128.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin_engine::{normalize_degrees, resolve_index, POINTER_ANGLE};

    fn layout(rotation: f64, size: f64, compact: bool) -> WheelLayout {
        WheelLayout::compute(rotation, size, &PrizeCatalog::default(), compact, &WheelConfig::default())
    }

    #[test]
    fn test_segments_cover_full_circle_in_order() {
        let wheel = layout(0.0, 500.0, false);
        assert_eq!(wheel.segments.len(), 5);
        assert_eq!(wheel.segments[0].start_angle, 0.0);
        for pair in wheel.segments.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
        }
        let last = wheel.segments.last().unwrap();
        assert!((last.end_angle - 2.0 * PI).abs() < 1e-12);
        assert_eq!(wheel.segments[1].color, "#33FF57");
    }

    #[test]
    fn test_rotation_is_subtracted() {
        let wheel = layout(90.0, 500.0, false);
        assert!((wheel.segments[0].start_angle + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_drawn_segment_under_pointer_matches_resolution() {
        for step in 0..72 {
            let rotation = step as f64 * 5.0 + 2.5;
            let wheel = layout(rotation, 500.0, false);
            let pointer = POINTER_ANGLE.to_radians();
            let drawn = wheel
                .segments
                .iter()
                .position(|s| {
                    let start = normalize_degrees(s.start_angle.to_degrees());
                    let span = s.end_angle.to_degrees() - s.start_angle.to_degrees();
                    let from_start = normalize_degrees(pointer.to_degrees() - start);
                    from_start < span
                })
                .unwrap();
            assert_eq!(drawn, resolve_index(rotation, 5));
        }
    }

    #[test]
    fn test_label_breakpoints() {
        assert_eq!(label_font(300.0), "bold 8px sans-serif");
        assert_eq!(label_font(350.0), "bold 10px sans-serif");
        assert_eq!(label_font(400.0), "bold 12px sans-serif");
        assert_eq!(label_font(500.0), "bold 16px sans-serif");

        assert_eq!(truncate_label("25% Discount", 300.0), "25%...");
        assert_eq!(truncate_label("25% Discount", 380.0), "25%");
        assert_eq!(truncate_label("25% Discount", 450.0), "25% Discount");
        assert_eq!(truncate_label("Gift", 300.0), "Gift");
    }

    #[test]
    fn test_hub_and_pointer_scale_with_size() {
        let compact = layout(0.0, 300.0, true);
        assert_eq!(compact.radius, 140.0);
        assert_eq!(compact.hub.radius, 15.0);
        assert_eq!(compact.hub.inner_ring_radius, 12.0);
        assert_eq!(compact.pointer.tip, (150.0, 25.0));

        let large = layout(0.0, 500.0, false);
        assert_eq!(large.radius, 230.0);
        assert_eq!(large.hub.radius, 30.0);
        assert_eq!(large.pointer.left, (232.0, POINTER_TOP));
        assert_eq!(large.pointer.right, (268.0, POINTER_TOP));
        assert_eq!(large.pointer.tip, (250.0, 60.0));
    }

    #[test]
    fn test_viewport_sizes() {
        assert_eq!(wheel_size_for_viewport(1200.0, true), 300.0);
        assert_eq!(wheel_size_for_viewport(500.0, false), 300.0);
        assert_eq!(wheel_size_for_viewport(700.0, false), 400.0);
        assert_eq!(wheel_size_for_viewport(1024.0, false), 500.0);
        assert_eq!(spin_button_size(300.0, false), 80.0);
        assert_eq!(spin_button_size(500.0, false), 128.0);
        assert_eq!(spin_button_size(500.0, true), 60.0);
    }
}
