//! Outbound email sent through the email provider.

use serde::Serialize;

/// A single HTML email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}
