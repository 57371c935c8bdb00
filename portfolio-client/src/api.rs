use portfolio_contact::ContactSubmission;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed")]
    Request(#[from] reqwest::Error),

    #[error("Failed to serialize/deserialize message")]
    Serde(#[from] serde_json::Error),

    #[error("Server rejected the submission with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthReply {
    pub status: String,
    pub message: String,
}

/// The one call the contact form makes. Kept behind a trait so the form can
/// be driven without a server.
#[async_trait::async_trait]
pub trait ContactApi {
    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ServerReply, ClientError>;
}

#[derive(Clone)]
pub struct ContactClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ContactClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Uses `PORTFOLIO_API_URL`, falling back to the local development server.
    pub fn from_env() -> Self {
        let base_url = std::env::var("PORTFOLIO_API_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthReply, ClientError> {
        let resp = self
            .http_client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;
        let status = resp.status();
        let json = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: None,
            });
        }
        Ok(serde_json::from_str(&json)?)
    }
}

#[async_trait::async_trait]
impl ContactApi for ContactClient {
    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ServerReply, ClientError> {
        let body = serde_json::to_string(submission)?;
        let resp = self
            .http_client
            .post(format!("{}/api/contact", self.base_url))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        let status = resp.status();
        let json = resp.text().await?;
        let reply: ServerReply = serde_json::from_str(&json)?;
        if !status.is_success() {
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: reply.message,
            });
        }
        Ok(reply)
    }
}
