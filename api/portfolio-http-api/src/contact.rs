use axum::{
    Form, Json,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, header},
};
use log::info;
use portfolio_contact::{ContactRequest, DeliveryOutcome};

use crate::{AppState, error::ApiError};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Contact payload read from either a JSON or a urlencoded form body. A body
/// of any other content type, or an empty one, reads as a request with every
/// field missing.
pub struct ContactBody(pub ContactRequest);

fn has_content_type(headers: &HeaderMap, mime: &str) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(mime))
}

impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_content_type(req.headers(), "application/x-www-form-urlencoded") {
            let Form(request) = Form::<ContactRequest>::from_request(req, state)
                .await
                .map_err(|e| ApiError::MalformedBody(e.body_text()))?;
            return Ok(Self(request));
        }
        if !has_content_type(req.headers(), "application/json") {
            return Ok(Self(ContactRequest::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(ContactRequest::default()));
        }
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

pub async fn post_contact(
    State(app_state): State<AppState>,
    ContactBody(request): ContactBody,
) -> Result<Json<ContactResponse>, ApiError> {
    let outcome = app_state.relay.submit(request).await?;
    match outcome {
        DeliveryOutcome::Sent => info!("Contact submission delivered by email"),
        DeliveryOutcome::Logged => info!("Contact submission logged, no mail account configured"),
    }
    Ok(Json(ContactResponse::ok(SUCCESS_MESSAGE)))
}
