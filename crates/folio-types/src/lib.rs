//! Shared domain types for Folio.
//!
//! This crate contains the content rows read from the data backend, the
//! contact message written to it, the table query builder, site
//! configuration and the error enums shared by every other crate.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod contact;
pub mod content;
pub mod email;
pub mod error;
pub mod query;
