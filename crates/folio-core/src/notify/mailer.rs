//! Mailer trait definition.

use folio_types::email::OutboundEmail;
use folio_types::error::EmailError;

/// Trait for transactional email providers.
///
/// Implementations live in folio-infra (e.g., `ResendMailer`).
pub trait Mailer: Send + Sync {
    /// Send one email. Success means the provider accepted it for delivery.
    fn send(
        &self,
        email: &OutboundEmail,
    ) -> impl std::future::Future<Output = Result<(), EmailError>> + Send;
}
