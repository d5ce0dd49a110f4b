//! Delivery channels used by the contact form controller.
//!
//! A channel is one way of getting a contact message recorded: the contact
//! endpoint (primary) or a direct insert into the data backend (fallback).

use std::fmt;

use folio_types::contact::{ContactMessage, MESSAGES_TABLE};
use folio_types::error::{BackendError, DeliveryError};

use crate::repository::TableStore;

/// Which channel recorded a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Endpoint,
    Backend,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Endpoint => f.write_str("endpoint"),
            ChannelKind::Backend => f.write_str("backend"),
        }
    }
}

/// One way of recording a contact message.
pub trait DeliveryChannel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    /// Record the message. `Ok` means the channel confirmed it.
    fn deliver(
        &self,
        message: &ContactMessage,
    ) -> impl std::future::Future<Output = Result<(), DeliveryError>> + Send;
}

/// Fallback channel: insert straight into the `messages` table.
///
/// Holds the restricted (public) backend credential, never the service one.
pub struct BackendChannel<S: TableStore> {
    store: S,
}

impl<S: TableStore> BackendChannel<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: TableStore> DeliveryChannel for BackendChannel<S> {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Backend
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let row = serde_json::to_value(message)
            .map_err(|e| BackendError::Decode(format!("failed to encode message row: {e}")))?;
        self.store.insert(MESSAGES_TABLE, row).await?;
        Ok(())
    }
}
