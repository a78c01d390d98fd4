use shared::display::AutoShow;
use shared::prize_catalog::{Prize, PrizeCatalog};
use web_sys::{window, UrlSearchParams};

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let (Ok(protocol), Ok(host)) = (location.protocol(), location.host()) {
            // Keep the port number (if any) from the current location
            if !host.is_empty() {
                return format!("{}//{}", protocol, host);
            }
        }
    }

    // Default to 127.0.0.1 for development
    "http://127.0.0.1:3000".to_string()
}

pub fn api_url(endpoint: &str) -> String {
    format!("{}{}", get_api_base_url(), endpoint)
}

/// Widget settings carried in the page query string.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WidgetOptions {
    pub embedded: bool,
    pub compact: bool,
    pub prizes: Option<PrizeCatalog>,
    pub auto_show: Option<AutoShow>,
}

impl WidgetOptions {
    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn from_query(search: &str) -> Self {
        let params = match UrlSearchParams::new_with_str(search) {
            Ok(params) => params,
            Err(_) => return Self::default(),
        };
        let flag = |name: &str| {
            params
                .get(name)
                .map(|value| value == "true" || value == "1")
                .unwrap_or(false)
        };

        Self {
            embedded: flag("embedded"),
            compact: flag("compact"),
            prizes: params.get("prizes").and_then(|raw| parse_prize_override(&raw)),
            auto_show: AutoShow::from_params(
                params.get("trigger").as_deref(),
                params.get("delay").as_deref(),
            ),
        }
    }
}

/// Accepts either widget prizes (`name`/`color`/`probability`) or the
/// remote endpoint shape (`hex_color`/`discount_percent`/`probability`).
fn parse_prize_override(raw: &str) -> Option<PrizeCatalog> {
    if let Ok(prizes) = serde_json::from_str::<Vec<Prize>>(raw) {
        return match PrizeCatalog::from_prizes(prizes) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                log::warn!("Ignoring prizes parameter: {}", e);
                None
            }
        };
    }
    match PrizeCatalog::from_api_json(raw) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            log::warn!("Ignoring prizes parameter: {}", e);
            None
        }
    }
}
