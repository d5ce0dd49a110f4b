//! Contact form domain types.
//!
//! `ContactRequest` is the raw body posted to the contact endpoint,
//! `ContactMessage` is the validated row written to the `messages` table,
//! and `StatusMessage` is the short user-facing result of a form submission.

use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Backend table contact messages are written to.
pub const MESSAGES_TABLE: &str = "messages";

/// Raw contact endpoint body. Every field may be absent or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Require all three fields to be present and non-empty.
    ///
    /// Only emptiness is checked; values are not trimmed here. Trimming is
    /// the form's job.
    pub fn validate(self) -> Result<ContactMessage, ContactError> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        match (present(self.name), present(self.email), present(self.message)) {
            (Some(name), Some(email), Some(message)) => Ok(ContactMessage {
                name,
                email,
                message,
            }),
            _ => Err(ContactError::MissingFields),
        }
    }
}

/// A validated contact message, as inserted into the `messages` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Tone of a form status message, mapped to a colour class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Warning,
    Success,
    Failure,
}

impl StatusTone {
    /// CSS classes applied to the `response-message` element.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Warning => "mt-2 font-medium text-yellow-600",
            StatusTone::Success => "mt-2 font-medium text-green-600",
            StatusTone::Failure => "mt-2 font-medium text-red-600",
        }
    }
}

/// User-visible result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Warning,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Failure,
        }
    }

    pub fn css_class(&self) -> &'static str {
        self.tone.css_class()
    }
}
