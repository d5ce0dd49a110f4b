//! Primary delivery channel: POST the form to the contact endpoint.

use std::time::Duration;

use folio_core::contact::{ChannelKind, DeliveryChannel};
use folio_types::contact::ContactMessage;
use folio_types::error::DeliveryError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts contact messages as JSON to `POST /api/contact`.
///
/// A request that never gets a response is a `Network` error; any non-2xx
/// response is `Rejected`. The controller falls back on both.
pub struct ContactEndpointChannel {
    client: reqwest::Client,
    url: String,
}

impl ContactEndpointChannel {
    pub fn new(url: impl Into<String>) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DeliveryError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl DeliveryChannel for ContactEndpointChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Endpoint
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %self.url, status = status.as_u16(), "contact endpoint rejected message");
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
