//! HTTP request handlers.

pub mod contact;
pub mod sections;
