use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use log::info;
use portfolio_contact::ContactRelay;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub mod contact;
pub mod error;
pub mod health;

pub use contact::{ContactResponse, SUCCESS_MESSAGE};
pub use error::{DELIVERY_FAILED_MESSAGE, INVALID_BODY_MESSAGE};
pub use health::HealthResponse;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ContactRelay>,
}

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid allowed origin {0:?}")]
    InvalidOrigin(String),
}

fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, RouterError> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|_| RouterError::InvalidOrigin(allowed_origin.to_string()))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

pub fn router(relay: Arc<ContactRelay>, allowed_origin: &str) -> Result<Router, RouterError> {
    let router: Router<AppState> = Router::new().nest(
        "/api",
        Router::new()
            .route("/contact", post(contact::post_contact))
            .route("/health", get(health::get_health)),
    );
    Ok(router
        .layer(cors_layer(allowed_origin)?)
        .with_state(AppState { relay }))
}

pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    info!("API server listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal)
        .await?;
    info!("HTTP API shut down gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use portfolio_contact::mail::{MockMailPort, SendMailError};
    use tower::ServiceExt;

    use super::*;

    const ORIGIN: &str = "http://localhost:5173";

    fn app(relay: ContactRelay) -> Router {
        router(Arc::new(relay), ORIGIN).expect("router")
    }

    fn post_json(body: serde_json::Value) -> Request<Body> {
        Request::post("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn read_contact(response: axum::response::Response) -> ContactResponse {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn test_health_is_ok_without_mail() {
        let response = app(ContactRelay::without_mailer())
            .oneshot(Request::get("/api/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let health: HealthResponse = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(health.status, "OK");
        assert_eq!(health.message, "Portfolio backend is running");
    }

    #[tokio::test]
    async fn test_health_is_ok_with_failing_mail() {
        let mock = MockMailPort::failing(SendMailError::Transport("down".into()));
        let response = app(ContactRelay::with_mailer(mock))
            .oneshot(Request::get("/api/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_valid_submission_without_mail_is_logged() {
        let response = app(ContactRelay::without_mailer())
            .oneshot(post_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello, this is a test message."
            })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_contact(response).await,
            ContactResponse::ok("Message sent successfully!")
        );
    }

    #[tokio::test]
    async fn test_valid_submission_is_mailed() {
        let mock = MockMailPort::default();
        let response = app(ContactRelay::with_mailer(mock.clone()))
            .oneshot(post_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello, this is a test message."
            })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let mails = mock.get_mails();
        assert_eq!(mails.len(), 1);
        assert_eq!(mails[0].subject, "Portfolio Contact: Ada");
        assert_eq!(mails[0].reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn test_validation_failures_are_reported_verbatim() {
        let cases = [
            (
                serde_json::json!({ "email": "ada@example.com", "message": "Hello there, world" }),
                "All fields are required",
            ),
            (
                serde_json::json!({ "name": "Ada", "email": "ada@example", "message": "Hello there, world" }),
                "Invalid email address",
            ),
            (
                serde_json::json!({ "name": "Ada", "email": "ada@example.com", "message": "123456789" }),
                "Message must be at least 10 characters",
            ),
        ];
        for (body, expected) in cases {
            let response = app(ContactRelay::without_mailer())
                .oneshot(post_json(body))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(read_contact(response).await, ContactResponse::failure(expected));
        }
    }

    #[tokio::test]
    async fn test_message_of_ten_characters_is_accepted() {
        let response = app(ContactRelay::without_mailer())
            .oneshot(post_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "1234567890"
            })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delivery_failure_hides_cause() {
        let mock = MockMailPort::failing(SendMailError::Transport(
            "535 authentication rejected".into(),
        ));
        let response = app(ContactRelay::with_mailer(mock))
            .oneshot(post_json(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello, this is a test message."
            })))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let reply = read_contact(response).await;
        assert_eq!(reply, ContactResponse::failure(DELIVERY_FAILED_MESSAGE));
        assert!(!reply.message.contains("535"));
    }

    #[tokio::test]
    async fn test_form_encoded_submission_is_accepted() {
        let request = Request::post("/api/contact")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(
                "name=Ada&email=ada%40example.com&message=Hello%2C+this+is+a+test+message.",
            ))
            .expect("request");
        let response = app(ContactRelay::without_mailer())
            .oneshot(request)
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_body_reports_missing_fields() {
        let request = Request::post("/api/contact")
            .body(Body::empty())
            .expect("request");
        let response = app(ContactRelay::without_mailer())
            .oneshot(request)
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_contact(response).await,
            ContactResponse::failure("All fields are required")
        );
    }

    #[tokio::test]
    async fn test_unsupported_content_type_reports_missing_fields() {
        let body = serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello, this is a test message."
        });
        let request = Request::post("/api/contact")
            .header("content-type", "text/plain")
            .body(Body::from(body.to_string()))
            .expect("request");
        let response = app(ContactRelay::without_mailer())
            .oneshot(request)
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_contact(response).await,
            ContactResponse::failure("All fields are required")
        );
    }

    #[tokio::test]
    async fn test_json_content_type_with_charset_is_parsed() {
        let request = Request::post("/api/contact")
            .header("content-type", "application/json; charset=utf-8")
            .body(Body::from(
                r#"{"name":"Ada","email":"ada@example.com","message":"Hello, this is a test message."}"#,
            ))
            .expect("request");
        let response = app(ContactRelay::without_mailer())
            .oneshot(request)
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let request = Request::post("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": 42"))
            .expect("request");
        let response = app(ContactRelay::without_mailer())
            .oneshot(request)
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_contact(response).await,
            ContactResponse::failure(INVALID_BODY_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/contact")
            .header("origin", ORIGIN)
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .expect("request");
        let response = app(ContactRelay::without_mailer())
            .oneshot(request)
            .await
            .expect("response");
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some(ORIGIN)
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        assert!(matches!(
            router(Arc::new(ContactRelay::without_mailer()), "http://bad\norigin"),
            Err(RouterError::InvalidOrigin(..))
        ));
    }
}
