//! Contact submission handler service.
//!
//! Validates a submission, persists it to the `messages` table and sends a
//! best-effort notification email. Persistence is the success criterion;
//! notification failures are logged and swallowed.

use folio_types::contact::{ContactMessage, ContactRequest, MESSAGES_TABLE};
use folio_types::error::{BackendError, ContactError};

use crate::notify::Mailer;
use crate::notify::template::{NotificationRoute, contact_notification};
use crate::repository::TableStore;

/// Confirmation text returned once a message has been stored.
pub const STORED_CONFIRMATION: &str = "Message stored and email sent";

/// Mailer paired with the route notifications are sent along.
pub struct Notifier<M> {
    pub mailer: M,
    pub route: NotificationRoute,
}

/// Outcome of the notification step. Never affects the handler response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Sent,
    Failed,
    /// No email provider configured.
    Skipped,
}

/// A successfully stored submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub message: ContactMessage,
    pub notification: NotificationStatus,
}

/// Service behind `POST /api/contact`.
///
/// Stateless apart from the shared backend: each call is independent.
pub struct ContactService<S: TableStore, M: Mailer> {
    store: S,
    notifier: Option<Notifier<M>>,
}

impl<S: TableStore, M: Mailer> ContactService<S, M> {
    /// Create a service. `notifier` is `None` when no email provider is
    /// configured; submissions are still stored.
    pub fn new(store: S, notifier: Option<Notifier<M>>) -> Self {
        Self { store, notifier }
    }

    /// Validate, persist and notify.
    ///
    /// Returns `MissingFields` without touching the backend when any field
    /// is missing or empty, and `Storage` without attempting email when the
    /// insert fails.
    pub async fn submit(&self, request: ContactRequest) -> Result<ContactReceipt, ContactError> {
        let message = request.validate()?;

        self.persist(&message).await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to insert contact message");
        })?;

        let notification = self.notify(&message).await;

        Ok(ContactReceipt {
            message,
            notification,
        })
    }

    async fn persist(&self, message: &ContactMessage) -> Result<(), BackendError> {
        let row = serde_json::to_value(message)
            .map_err(|e| BackendError::Decode(format!("failed to encode message row: {e}")))?;
        self.store.insert(MESSAGES_TABLE, row).await
    }

    async fn notify(&self, message: &ContactMessage) -> NotificationStatus {
        let Some(notifier) = &self.notifier else {
            tracing::warn!("email provider not configured, skipping contact notification");
            return NotificationStatus::Skipped;
        };

        let email = contact_notification(&notifier.route, message);
        match notifier.mailer.send(&email).await {
            Ok(()) => {
                tracing::info!(to = %email.to, "contact notification sent");
                NotificationStatus::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, "contact notification email failed");
                NotificationStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::testing::{MemoryStore, RecordingMailer};

    fn notifier(mailer: RecordingMailer) -> Option<Notifier<RecordingMailer>> {
        Some(Notifier {
            mailer,
            route: NotificationRoute {
                from: "no-reply@folio.dev".to_string(),
                to: "owner@folio.dev".to_string(),
            },
        })
    }

    fn request(value: serde_json::Value) -> ContactRequest {
        serde_json::from_value(value).unwrap()
    }

    fn ada() -> ContactRequest {
        request(json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}))
    }

    #[tokio::test]
    async fn test_valid_submission_stores_one_row_and_notifies() {
        let store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let service = ContactService::new(store.clone(), notifier(mailer.clone()));

        let receipt = service.submit(ada()).await.unwrap();

        assert_eq!(receipt.notification, NotificationStatus::Sent);
        let inserted = store.inserted();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].0, "messages");
        assert_eq!(
            inserted[0].1,
            json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"})
        );
        assert_eq!(mailer.sent().len(), 1);
        assert_eq!(mailer.sent()[0].subject, "📩 New Contact Form Submission from Ada");
    }

    #[tokio::test]
    async fn test_missing_field_has_no_side_effects() {
        let store = MemoryStore::new();
        let mailer = RecordingMailer::new();
        let service = ContactService::new(store.clone(), notifier(mailer.clone()));

        let err = service
            .submit(request(json!({"name": "", "email": "x@x.com", "message": "hi"})))
            .await
            .unwrap_err();

        assert!(matches!(err, ContactError::MissingFields));
        assert!(store.inserted().is_empty());
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_insert_failure_skips_email() {
        let store = MemoryStore::new().failing_inserts();
        let mailer = RecordingMailer::new();
        let service = ContactService::new(store.clone(), notifier(mailer.clone()));

        let err = service.submit(ada()).await.unwrap_err();

        assert!(matches!(err, ContactError::Storage(_)));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_email_failure_still_succeeds() {
        let store = MemoryStore::new();
        let mailer = RecordingMailer::failing();
        let service = ContactService::new(store.clone(), notifier(mailer.clone()));

        let receipt = service.submit(ada()).await.unwrap();

        assert_eq!(receipt.notification, NotificationStatus::Failed);
        assert_eq!(store.inserted().len(), 1);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_mailer_skips_notification() {
        let store = MemoryStore::new();
        let service: ContactService<MemoryStore, RecordingMailer> =
            ContactService::new(store.clone(), None);

        let receipt = service.submit(ada()).await.unwrap();

        assert_eq!(receipt.notification, NotificationStatus::Skipped);
        assert_eq!(store.inserted().len(), 1);
    }
}
