//! Email notification port and the contact notification template.

pub mod dyn_mailer;
pub mod mailer;
pub mod template;

pub use dyn_mailer::DynMailer;
pub use mailer::Mailer;
