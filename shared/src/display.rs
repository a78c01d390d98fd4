//! When the widget shows itself, and how the floating launcher is placed.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::constants::{DEFAULT_AUTO_OPEN_MS, DEFAULT_SHOW_DELAY_MS, SCROLL_TRIGGER_PERCENT};

static COLOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#[0-9a-fA-F]{3,8}|[a-zA-Z]{3,20})$").unwrap());
static LENGTH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,4}(px|%|vh|vw)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTrigger {
    Delay,
    Immediate,
    Scroll,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoShow {
    pub trigger: DisplayTrigger,
    pub delay_ms: u32,
}

impl AutoShow {
    /// `None` when no trigger was requested: the widget is visible from the start.
    pub fn from_params(trigger: Option<&str>, delay: Option<&str>) -> Option<Self> {
        let trigger = trigger?.trim();
        let trigger = trigger.parse().unwrap_or_else(|_| {
            log::warn!("Unknown display trigger '{}', falling back to delay", trigger);
            DisplayTrigger::Delay
        });
        let delay_ms = delay
            .and_then(|d| d.trim().parse().ok())
            .unwrap_or(DEFAULT_SHOW_DELAY_MS);
        Some(Self { trigger, delay_ms })
    }
}

/// True once more than the trigger share of the scrollable height is behind the viewport.
pub fn scroll_threshold_reached(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> bool {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return false;
    }
    scroll_y / scrollable * 100.0 > SCROLL_TRIGGER_PERCENT
}

/// The pointer left the document through its top edge.
pub fn is_exit_intent(client_y: f64) -> bool {
    client_y <= 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum LauncherPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl LauncherPosition {
    pub fn is_right(self) -> bool {
        matches!(self, LauncherPosition::BottomRight | LauncherPosition::TopRight)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, LauncherPosition::BottomRight | LauncherPosition::BottomLeft)
    }
}

/// Settings baked into the floating launcher script.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LauncherOptions {
    pub widget_url: String,
    pub position: LauncherPosition,
    pub button_color: String,
    pub button_text: String,
    pub widget_width: String,
    pub widget_height: String,
    pub auto_open_ms: Option<u32>,
}

impl LauncherOptions {
    pub fn new(widget_url: impl Into<String>) -> Self {
        Self {
            widget_url: widget_url.into(),
            position: LauncherPosition::default(),
            button_color: "#FF6B35".to_string(),
            button_text: "🎡 Spin to Win".to_string(),
            widget_width: "400px".to_string(),
            widget_height: "600px".to_string(),
            auto_open_ms: None,
        }
    }

    /// Applies query parameters; values that fail validation keep their defaults.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Self {
        if let Some(position) = params.get("position") {
            match position.parse() {
                Ok(position) => self.position = position,
                Err(_) => log::warn!("Ignoring launcher position '{}'", position),
            }
        }
        if let Some(color) = params.get("color").filter(|c| COLOR_PATTERN.is_match(c)) {
            self.button_color = color.clone();
        }
        if let Some(text) = params.get("text").map(|t| t.trim()).filter(|t| !t.is_empty()) {
            self.button_text = text.chars().take(40).collect();
        }
        if let Some(width) = params.get("width").filter(|w| LENGTH_PATTERN.is_match(w)) {
            self.widget_width = width.clone();
        }
        if let Some(height) = params.get("height").filter(|h| LENGTH_PATTERN.is_match(h)) {
            self.widget_height = height.clone();
        }
        // `auto_open=true` waits `delay` ms; a numeric `auto_open` is the delay itself.
        match params.get("auto_open").map(String::as_str) {
            Some("true") => {
                let delay = params.get("delay").and_then(|d| d.parse().ok());
                self.auto_open_ms = Some(delay.unwrap_or(DEFAULT_AUTO_OPEN_MS));
            }
            Some(value) => {
                if let Ok(delay) = value.parse() {
                    self.auto_open_ms = Some(delay);
                }
            }
            None => {}
        }
        self
    }
}
