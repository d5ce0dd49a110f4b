//! Resend API wire types.

use serde::{Deserialize, Serialize};

use folio_types::email::OutboundEmail;

/// Body of `POST /emails`.
#[derive(Debug, Serialize)]
pub struct ResendEmailRequest<'a> {
    pub from: &'a str,
    pub to: Vec<&'a str>,
    pub subject: &'a str,
    pub html: &'a str,
}

impl<'a> From<&'a OutboundEmail> for ResendEmailRequest<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            from: &email.from,
            to: vec![&email.to],
            subject: &email.subject,
            html: &email.html,
        }
    }
}

/// Successful `POST /emails` response.
#[derive(Debug, Deserialize)]
pub struct ResendEmailResponse {
    pub id: String,
}

/// Error body returned by Resend on 4xx/5xx.
#[derive(Debug, Deserialize)]
pub struct ResendErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    pub message: String,
}
