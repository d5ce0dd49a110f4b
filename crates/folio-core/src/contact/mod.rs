//! Contact form: the server-side submission handler and the client-side
//! form controller with its delivery channels.

pub mod channel;
pub mod form;
pub mod service;

pub use channel::{BackendChannel, ChannelKind, DeliveryChannel};
pub use form::{ContactForm, Delivery, FormController};
pub use service::{ContactReceipt, ContactService, NotificationStatus, Notifier};
