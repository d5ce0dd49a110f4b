//! Store that panics on insert, for exercising the router's panic recovery.

use folio_core::repository::TableStore;
use folio_types::error::BackendError;
use folio_types::query::TableQuery;

pub struct PanickingStore;

impl TableStore for PanickingStore {
    async fn select(&self, _query: &TableQuery) -> Result<Vec<serde_json::Value>, BackendError> {
        Ok(Vec::new())
    }

    async fn insert(&self, _table: &str, _row: serde_json::Value) -> Result<(), BackendError> {
        panic!("store exploded")
    }
}
