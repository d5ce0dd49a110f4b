//! ResendMailer -- concrete [`Mailer`] for the Resend email API.
//!
//! Sends `POST {base_url}/emails` with a bearer API key. The key is wrapped
//! in [`SecretString`] and is only exposed when building the request.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use folio_core::notify::Mailer;
use folio_types::email::OutboundEmail;
use folio_types::error::EmailError;

use super::types::{ResendEmailRequest, ResendEmailResponse, ResendErrorBody};

const DEFAULT_BASE_URL: &str = "https://api.resend.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ResendMailer {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl ResendMailer {
    pub fn new(api_key: SecretString) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EmailError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&ResendEmailRequest::from(email))
            .send()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ResendErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // The id is only useful for correlating with the provider dashboard.
        match response.json::<ResendEmailResponse>().await {
            Ok(sent) => tracing::debug!(email_id = %sent.id, "email accepted by provider"),
            Err(e) => tracing::debug!(error = %e, "email accepted, response body unreadable"),
        }
        Ok(())
    }
}
