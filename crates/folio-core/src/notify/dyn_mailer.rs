//! DynMailer -- object-safe, cloneable wrapper for Mailer.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use folio_types::email::OutboundEmail;
use folio_types::error::EmailError;

use super::mailer::Mailer;

/// Object-safe version of [`Mailer`] with a boxed future.
pub trait MailerDyn: Send + Sync {
    fn send_boxed<'a>(
        &'a self,
        email: &'a OutboundEmail,
    ) -> Pin<Box<dyn Future<Output = Result<(), EmailError>> + Send + 'a>>;
}

impl<T: Mailer> MailerDyn for T {
    fn send_boxed<'a>(
        &'a self,
        email: &'a OutboundEmail,
    ) -> Pin<Box<dyn Future<Output = Result<(), EmailError>> + Send + 'a>> {
        Box::pin(self.send(email))
    }
}

/// Type-erased mailer for runtime provider selection.
#[derive(Clone)]
pub struct DynMailer {
    inner: Arc<dyn MailerDyn>,
}

impl DynMailer {
    pub fn new<T: Mailer + 'static>(mailer: T) -> Self {
        Self {
            inner: Arc::new(mailer),
        }
    }
}

impl Mailer for DynMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
        self.inner.send_boxed(email).await
    }
}
