use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::constants::{CONFIGURATION_ERROR, NETWORK_ERROR, PRIZES_UNAVAILABLE_ERROR, VALIDATION_ERROR};
use shared::lead::{LeadErrorResponse, LeadFieldErrors};

#[derive(Debug)]
pub enum Error {
    Validation(LeadFieldErrors),
    /// CRM credentials are missing.
    Configuration,
    /// The CRM answered with a non-success status.
    Crm(String),
    PrizesUnavailable,
    Network(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Error::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                LeadErrorResponse {
                    error: VALIDATION_ERROR.to_string(),
                    fields: Some(fields),
                },
            ),
            Error::Configuration => (StatusCode::INTERNAL_SERVER_ERROR, message(CONFIGURATION_ERROR)),
            Error::Crm(msg) => (StatusCode::BAD_GATEWAY, message(&msg)),
            Error::PrizesUnavailable => (StatusCode::BAD_GATEWAY, message(PRIZES_UNAVAILABLE_ERROR)),
            Error::Network(e) => {
                tracing::error!("Upstream request failed: {}", e);
                (StatusCode::BAD_GATEWAY, message(NETWORK_ERROR))
            }
        };

        (status, Json(body)).into_response()
    }
}

fn message(error: &str) -> LeadErrorResponse {
    LeadErrorResponse {
        error: error.to_string(),
        fields: None,
    }
}
