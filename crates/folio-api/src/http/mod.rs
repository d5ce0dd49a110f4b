//! HTTP layer for Folio.
//!
//! Axum router serving the contact endpoint, rendered content sections and
//! the static site, with CORS, request tracing and panic recovery.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
