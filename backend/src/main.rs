use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use shared::constants::{LEADS_ENDPOINT, PRIZES_ENDPOINT};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes::{assets, embed_scripts, leads, prizes};

mod config;
mod error;
mod logging;
mod routes;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    // Loader scripts and the widget iframe are requested from third-party pages.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);

    let api = Router::new()
        .route(PRIZES_ENDPOINT, get(prizes::get_prizes))
        .route(LEADS_ENDPOINT, post(leads::submit_lead));

    let scripts = Router::new()
        .route("/embed.js", get(embed_scripts::launcher_script))
        .route("/spin-wheel-embed.js", get(embed_scripts::custom_element_script));

    let frontend = assets::frontend_service(&state.config.frontend_dist);

    Router::new()
        .merge(api)
        .merge(scripts)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = ServerConfig::from_env()?;
    if config.crm.credentials().is_none() {
        tracing::warn!("CRM credentials missing, lead submissions will be rejected");
    }
    if config.prizes_upstream_url.is_none() {
        info!("No prize upstream configured, widgets will use the default catalog");
    }

    let addr = config.bind_addr;
    let app = build_router(AppState::new(config)?);

    info!("listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
