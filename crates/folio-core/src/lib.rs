//! Business logic and port trait definitions for Folio.
//!
//! This crate defines the "ports" (table store, mailer, delivery channel)
//! that the infrastructure layer implements, plus the contact handler
//! service, the content loader and the contact form controller. It depends
//! only on `folio-types` -- never on `folio-infra` or any HTTP crate.

pub mod contact;
pub mod content;
pub mod html;
pub mod notify;
pub mod repository;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
