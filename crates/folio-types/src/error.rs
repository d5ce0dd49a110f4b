use thiserror::Error;

/// Errors from the hosted data backend (select or insert).
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode backend rows: {0}")]
    Decode(String),

    #[error("backend access is not configured")]
    NotConfigured,
}

/// Errors from the transactional email provider.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("email request failed: {0}")]
    Transport(String),

    #[error("email provider rejected the message (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Errors surfaced by the contact submission handler.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("missing required fields")]
    MissingFields,

    #[error("failed to save message: {0}")]
    Storage(#[from] BackendError),
}

/// Errors from a single delivery channel of the contact form controller.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request never produced a response (connect, DNS, reset, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint responded with HTTP {status}")]
    Rejected { status: u16 },

    #[error(transparent)]
    Backend(#[from] BackendError),
}
