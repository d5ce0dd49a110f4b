//! Contact form controller.
//!
//! Two-step delivery strategy: the primary channel (contact endpoint) is
//! tried first; any failure, whether a network error or a non-success
//! response, falls back to a direct backend write. Both paths produce the
//! same [`Delivery`] result.
//!
//! There is no idempotence key. If the endpoint stored the message but the
//! client saw a failure, the fallback writes it a second time.

use folio_types::contact::{ContactMessage, StatusMessage};
use folio_types::error::{BackendError, DeliveryError};

use super::channel::{ChannelKind, DeliveryChannel};

pub const MSG_FIELDS_REQUIRED: &str = "⚠️ All fields are required.";
pub const MSG_SENT: &str = "✅ Message sent successfully!";
pub const MSG_RECORDED: &str = "✅ Message recorded. Thank you!";
pub const MSG_FAILED: &str = "❌ Failed to send message. Try again later.";

/// Current values of the `contact-form` inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Clear every input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// Trimmed field values, or `None` if any is empty after trimming.
    pub fn trimmed(&self) -> Option<ContactMessage> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return None;
        }
        Some(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Result of running the delivery strategy.
#[derive(Debug)]
pub enum Delivery {
    Recorded { via: ChannelKind },
    Failed { error: DeliveryError },
}

/// Drives a form submission through the primary and fallback channels.
pub struct FormController<P: DeliveryChannel, F: DeliveryChannel> {
    primary: P,
    fallback: Option<F>,
}

impl<P: DeliveryChannel, F: DeliveryChannel> FormController<P, F> {
    /// `fallback` is `None` when no public backend credential is configured;
    /// a primary failure is then reported as a failed delivery.
    pub fn new(primary: P, fallback: Option<F>) -> Self {
        Self { primary, fallback }
    }

    /// Try the primary channel, then the fallback.
    pub async fn deliver(&self, message: &ContactMessage) -> Delivery {
        match self.primary.deliver(message).await {
            Ok(()) => {
                return Delivery::Recorded {
                    via: self.primary.kind(),
                };
            }
            Err(e) => {
                tracing::warn!(
                    channel = %self.primary.kind(),
                    error = %e,
                    "primary contact channel failed, falling back"
                );
            }
        }

        let Some(fallback) = &self.fallback else {
            return Delivery::Failed {
                error: DeliveryError::Backend(BackendError::NotConfigured),
            };
        };

        match fallback.deliver(message).await {
            Ok(()) => Delivery::Recorded {
                via: fallback.kind(),
            },
            Err(error) => Delivery::Failed { error },
        }
    }

    /// Handle a submit event: validate, deliver, update the form.
    ///
    /// The form is reset only when a channel recorded the message; on
    /// failure it keeps its values so the visitor can retry.
    pub async fn submit(&self, form: &mut ContactForm) -> StatusMessage {
        let Some(message) = form.trimmed() else {
            return StatusMessage::warning(MSG_FIELDS_REQUIRED);
        };

        match self.deliver(&message).await {
            Delivery::Recorded { via } => {
                tracing::info!(channel = %via, "contact message recorded");
                form.reset();
                match via {
                    ChannelKind::Endpoint => StatusMessage::success(MSG_SENT),
                    ChannelKind::Backend => StatusMessage::success(MSG_RECORDED),
                }
            }
            Delivery::Failed { error } => {
                tracing::error!(error = %error, "contact message could not be recorded");
                StatusMessage::failure(MSG_FAILED)
            }
        }
    }
}
