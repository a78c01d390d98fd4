use axum::extract::State;
use axum::Json;
use reqwest::header;
use shared::lead::{crm_error_message, generate_coupon_code, CrmContactRequest, LeadResponse, LeadSubmission};
use tracing::{info, warn};

use crate::error::Error;
use crate::AppState;

/// Validates the form, creates the CRM contact and hands back the coupon.
/// The coupon is only returned once the CRM has accepted the contact.
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(submission): Json<LeadSubmission>,
) -> Result<Json<LeadResponse>, Error> {
    submission.validate().map_err(Error::Validation)?;

    let crm = &state.config.crm;
    let (auth_token, location_id) = crm.credentials().ok_or_else(|| {
        warn!("Lead rejected: CRM credentials are not configured");
        Error::Configuration
    })?;

    let coupon_code = generate_coupon_code(&submission.discount, &mut rand::thread_rng());
    let contact = CrmContactRequest::from_submission(&submission, location_id, &coupon_code);

    let response = state
        .http
        .post(&crm.endpoint)
        .bearer_auth(auth_token)
        .header("Version", &crm.api_version)
        .header(header::ACCEPT, "application/json")
        .json(&contact)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("CRM rejected contact with status {}", status);
        return Err(Error::Crm(crm_error_message(status.as_u16(), &body)));
    }

    info!("Lead captured for {}% discount", submission.discount);
    Ok(Json(LeadResponse {
        coupon_code,
        discount: submission.discount,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::extract::State;
    use axum::http::{HeaderMap, Request, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use shared::lead::LeadResponse;
    use tower::ServiceExt;

    use crate::routes::testing::{app, body_json, spawn_upstream};

    type Captured = Arc<Mutex<Option<(HeaderMap, Value)>>>;

    fn valid_lead() -> Value {
        json!({
            "email": " jane@example.com ",
            "full_name": "Jane Doe",
            "mobile": "(555) 123-4567",
            "discount": "25"
        })
    }

    fn lead_request(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/leads")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn fake_crm(status: StatusCode, reply: &'static str) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let router = Router::new()
            .route(
                "/contacts/",
                post(move |State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    *captured.lock().unwrap() = Some((headers, body));
                    (status, reply)
                }),
            )
            .with_state(captured.clone());
        let base = spawn_upstream(router).await;
        (format!("{}/contacts/", base), captured)
    }

    #[tokio::test]
    async fn test_invalid_fields_are_reported_per_field() {
        let body = json!({"email": "nope", "full_name": "Jane", "mobile": "123", "discount": "25"});
        let response = app(&[]).oneshot(lead_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["fields"]["email"], "Please enter a valid email address");
        assert_eq!(json["fields"]["full_name"], "Please enter your full name (first and last)");
        assert_eq!(json["fields"]["mobile"], "Please enter a valid mobile number (at least 10 digits)");
        assert!(json["fields"]["discount"].is_null());
    }

    #[tokio::test]
    async fn test_missing_credentials_is_configuration_error() {
        let response = app(&[]).oneshot(lead_request(&valid_lead())).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Configuration error. Please contact support.");
    }

    #[tokio::test]
    async fn test_successful_submission_posts_contact() {
        let (endpoint, captured) = fake_crm(StatusCode::CREATED, r#"{"contact": {"id": "c1"}}"#).await;
        let response = app(&[
            ("CRM_ENDPOINT", endpoint.as_str()),
            ("CRM_AUTH_TOKEN", "token-123"),
            ("CRM_LOCATION_ID", "loc-9"),
        ])
        .oneshot(lead_request(&valid_lead()))
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let lead: LeadResponse = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(lead.discount, "25");
        assert!(lead.coupon_code.starts_with("25"));
        assert_eq!(lead.coupon_code.len(), 2 + 4 + 4);

        let (headers, contact) = captured.lock().unwrap().take().unwrap();
        assert_eq!(headers["authorization"], "Bearer token-123");
        assert_eq!(headers["version"], "2021-07-28");
        assert_eq!(contact["locationId"], "loc-9");
        assert_eq!(contact["firstName"], "Jane");
        assert_eq!(contact["email"], "jane@example.com");
        assert_eq!(contact["phone"], "5551234567");
        assert_eq!(contact["customFields"][0]["id"], "spintowin_coupon");
        assert_eq!(contact["customFields"][0]["value"], lead.coupon_code.as_str());
        assert_eq!(contact["customFields"][1]["value"], "25%");
    }

    #[tokio::test]
    async fn test_crm_message_is_surfaced() {
        let (endpoint, _) = fake_crm(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message": "Duplicate contact"}"#).await;
        let response = app(&[
            ("CRM_ENDPOINT", endpoint.as_str()),
            ("CRM_AUTH_TOKEN", "token-123"),
            ("CRM_LOCATION_ID", "loc-9"),
        ])
        .oneshot(lead_request(&valid_lead()))
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Duplicate contact");
        assert!(json.get("coupon_code").is_none());
    }

    #[tokio::test]
    async fn test_crm_non_json_error_reports_status() {
        let (endpoint, _) = fake_crm(StatusCode::SERVICE_UNAVAILABLE, "<html>down</html>").await;
        let response = app(&[
            ("CRM_ENDPOINT", endpoint.as_str()),
            ("CRM_AUTH_TOKEN", "token-123"),
            ("CRM_LOCATION_ID", "loc-9"),
        ])
        .oneshot(lead_request(&valid_lead()))
        .await
        .unwrap();
        assert_eq!(body_json(response).await["error"], "Server error: 503");
    }
}
