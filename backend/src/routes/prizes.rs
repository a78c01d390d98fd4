use axum::extract::State;
use axum::http::{header, HeaderName, StatusCode};
use tracing::warn;

use crate::error::Error;
use crate::AppState;

/// Relays the upstream prize list unchanged. Entry-level cleanup happens in
/// the widget, which falls back to its default catalog on any error here.
pub async fn get_prizes(
    State(state): State<AppState>,
) -> Result<(StatusCode, [(HeaderName, &'static str); 2], String), Error> {
    let Some(url) = state.config.prizes_upstream_url.as_deref() else {
        return Err(Error::PrizesUnavailable);
    };

    let response = state.http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!("Prize upstream returned {}", status);
        return Err(Error::PrizesUnavailable);
    }

    let body = response.text().await?;
    if serde_json::from_str::<serde_json::Value>(&body).map_or(true, |value| !value.is_array()) {
        warn!("Prize upstream did not return a JSON array");
        return Err(Error::PrizesUnavailable);
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use shared::prize_catalog::PrizeCatalog;
    use tower::ServiceExt;

    use crate::routes::testing::{app, body_json, body_string, spawn_upstream};

    const UPSTREAM_BODY: &str =
        r##"[{"id": 9, "hex_color": "#112233", "discount_percent": 0.3, "probability": 1.0}]"##;

    fn prizes_request() -> Request<Body> {
        Request::builder().uri("/api/prizes").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_unset_upstream_is_bad_gateway() {
        let response = app(&[]).oneshot(prizes_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"], "Prize catalog unavailable");
    }

    #[tokio::test]
    async fn test_relays_upstream_body() {
        let upstream = spawn_upstream(Router::new().route("/prizes", get(|| async { UPSTREAM_BODY }))).await;
        let url = format!("{}/prizes", upstream);

        let response = app(&[("PRIZES_UPSTREAM_URL", url.as_str())]).oneshot(prizes_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = body_string(response).await;
        let catalog = PrizeCatalog::from_api_json(&body).unwrap();
        assert_eq!(catalog.prizes()[0].name, "30% Discount");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let upstream = spawn_upstream(Router::new().route(
            "/prizes",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        let url = format!("{}/prizes", upstream);

        let response = app(&[("PRIZES_UPSTREAM_URL", url.as_str())]).oneshot(prizes_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_non_array_upstream_is_bad_gateway() {
        let upstream = spawn_upstream(Router::new().route("/prizes", get(|| async { r#"{"prizes": []}"# }))).await;
        let url = format!("{}/prizes", upstream);

        let response = app(&[("PRIZES_UPSTREAM_URL", url.as_str())]).oneshot(prizes_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
