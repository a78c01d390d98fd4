use gloo::net::http::Request;
use shared::constants::PRIZES_ENDPOINT;
use shared::prize_catalog::{CatalogError, PrizeCatalog};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::api_url;

pub async fn fetch_prize_catalog() -> Result<PrizeCatalog, CatalogError> {
    let response = Request::get(&api_url(PRIZES_ENDPOINT))
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Malformed(e.to_string()))?;
    PrizeCatalog::from_api_json(&body)
}

/// Default catalog until the remote one arrives; an explicit override skips the fetch.
#[hook]
pub fn use_prize_catalog(override_catalog: Option<PrizeCatalog>) -> PrizeCatalog {
    let catalog = use_state(|| override_catalog.clone().unwrap_or_default());

    {
        let catalog = catalog.clone();
        use_effect_with(override_catalog, move |override_catalog| {
            if override_catalog.is_none() {
                spawn_local(async move {
                    catalog.set(PrizeCatalog::or_default(fetch_prize_catalog().await));
                });
            }
            || ()
        });
    }

    (*catalog).clone()
}
