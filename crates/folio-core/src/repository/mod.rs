//! Data backend port.
//!
//! The hosted backend is reached through [`TableStore`]; the infrastructure
//! layer (folio-infra) implements it over HTTP.

pub mod dyn_store;
pub mod table;

pub use dyn_store::DynTableStore;
pub use table::TableStore;
