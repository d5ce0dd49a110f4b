//! TableStore trait definition.

use folio_types::error::BackendError;
use folio_types::query::TableQuery;

/// Table-scoped access to the hosted relational backend.
///
/// Rows travel as JSON objects; callers decode them into typed rows. The
/// site never updates or deletes, so the port only selects and inserts.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait TableStore: Send + Sync {
    /// Run a `select *` query and return the rows in backend order.
    fn select(
        &self,
        query: &TableQuery,
    ) -> impl std::future::Future<Output = Result<Vec<serde_json::Value>, BackendError>> + Send;

    /// Insert a single row into `table`.
    fn insert(
        &self,
        table: &str,
        row: serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;
}
