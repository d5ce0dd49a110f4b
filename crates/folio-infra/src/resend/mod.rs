//! Resend transactional email provider.

pub mod client;
pub mod types;

pub use client::ResendMailer;
