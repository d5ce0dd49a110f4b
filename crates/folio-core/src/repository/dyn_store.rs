//! DynTableStore -- object-safe, cloneable wrapper for TableStore.
//!
//! Same blanket-impl pattern as the mailer wrapper:
//! 1. Define an object-safe `TableStoreDyn` trait with boxed futures
//! 2. Blanket-impl `TableStoreDyn` for all `T: TableStore`
//! 3. `DynTableStore` wraps `Arc<dyn TableStoreDyn>` and delegates

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use folio_types::error::BackendError;
use folio_types::query::TableQuery;

use super::table::TableStore;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe version of [`TableStore`] with boxed futures.
pub trait TableStoreDyn: Send + Sync {
    fn select_boxed<'a>(
        &'a self,
        query: &'a TableQuery,
    ) -> BoxFuture<'a, Result<Vec<serde_json::Value>, BackendError>>;

    fn insert_boxed<'a>(
        &'a self,
        table: &'a str,
        row: serde_json::Value,
    ) -> BoxFuture<'a, Result<(), BackendError>>;
}

impl<T: TableStore> TableStoreDyn for T {
    fn select_boxed<'a>(
        &'a self,
        query: &'a TableQuery,
    ) -> BoxFuture<'a, Result<Vec<serde_json::Value>, BackendError>> {
        Box::pin(self.select(query))
    }

    fn insert_boxed<'a>(
        &'a self,
        table: &'a str,
        row: serde_json::Value,
    ) -> BoxFuture<'a, Result<(), BackendError>> {
        Box::pin(self.insert(table, row))
    }
}

/// Type-erased table store, shared between the contact service, the content
/// loader and the fallback delivery channel.
#[derive(Clone)]
pub struct DynTableStore {
    inner: Arc<dyn TableStoreDyn>,
}

impl DynTableStore {
    pub fn new<T: TableStore + 'static>(store: T) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }
}

impl TableStore for DynTableStore {
    async fn select(&self, query: &TableQuery) -> Result<Vec<serde_json::Value>, BackendError> {
        self.inner.select_boxed(query).await
    }

    async fn insert(&self, table: &str, row: serde_json::Value) -> Result<(), BackendError> {
        self.inner.insert_boxed(table, row).await
    }
}
