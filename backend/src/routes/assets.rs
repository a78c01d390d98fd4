use std::path::Path;

use axum::http::{header, HeaderValue};
use tower::Layer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::{SetResponseHeader, SetResponseHeaderLayer};

pub type FrontendService = SetResponseHeader<ServeDir<ServeFile>, HeaderValue>;

/// Serves the built widget bundle. Unknown paths get `index.html` so the
/// client-side routes (`/`, `/embed`, `/embed/spin-wheel`) resolve.
pub fn frontend_service(dist: &Path) -> FrontendService {
    if !dist.join("index.html").exists() {
        tracing::warn!("Frontend bundle not found at {}", dist.display());
    }

    let serve_dir = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    SetResponseHeaderLayer::if_not_present(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"))
        .layer(serve_dir)
}
