use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::debug;
use portfolio_contact::ContactError;

use crate::contact::ContactResponse;

pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

#[derive(Debug)]
pub enum ApiError {
    Contact(ContactError),
    MalformedBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Contact(ContactError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            // The cause was already logged by the relay and stays server-side.
            ApiError::Contact(ContactError::Delivery(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                DELIVERY_FAILED_MESSAGE.to_string(),
            ),
            ApiError::MalformedBody(detail) => {
                debug!("Rejected contact body: {}", detail);
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.to_string())
            }
        };
        (status, Json(ContactResponse::failure(message))).into_response()
    }
}

impl From<ContactError> for ApiError {
    fn from(value: ContactError) -> Self {
        ApiError::Contact(value)
    }
}
