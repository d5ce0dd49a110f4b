//! Infrastructure layer for Folio.
//!
//! Contains implementations of the ports defined in `folio-core`: the
//! Supabase (PostgREST) table store, the Resend mailer and the HTTP contact
//! endpoint channel, plus configuration loading from the environment and
//! `config.toml`.

pub mod config;
pub mod endpoint;
pub mod resend;
pub mod supabase;

#[cfg(test)]
pub(crate) mod stub;
