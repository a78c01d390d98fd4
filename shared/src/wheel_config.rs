use serde::{Deserialize, Serialize};

/// How the engine picks the extra offset added on top of the full spins.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LandingStrategy {
    /// Draw a prize by weight first, then land somewhere inside its arc.
    #[default]
    Weighted,
    /// Land on a uniformly random angle; prize weights are ignored.
    Uniform,
}

/// Tunables for the spin animation and the wheel drawing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub spin_duration_ms: f64,
    pub min_spins: u32,
    pub max_spins: u32,
    pub easing_exponent: i32,
    pub landing: LandingStrategy,
    pub center_circle_radius: f64,
    pub center_circle_color: String,
    pub center_circle_border: String,
    pub pointer_color: String,
    pub segment_border: String,
    pub segment_border_width: f64,
    pub text_color: String,
    pub pointer_size: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: 6000.0,
            min_spins: 8,
            max_spins: 12,
            easing_exponent: 4,
            landing: LandingStrategy::Weighted,
            center_circle_radius: 30.0,
            center_circle_color: "white".to_string(),
            center_circle_border: "#333".to_string(),
            pointer_color: "#333".to_string(),
            segment_border: "white".to_string(),
            segment_border_width: 3.0,
            text_color: "white".to_string(),
            pointer_size: 15.0,
        }
    }
}

impl WheelConfig {
    /// Spin bounds with `min <= max` guaranteed, whatever was deserialized.
    pub fn spin_range(&self) -> (u32, u32) {
        if self.min_spins <= self.max_spins {
            (self.min_spins, self.max_spins)
        } else {
            (self.max_spins, self.min_spins)
        }
    }
}
