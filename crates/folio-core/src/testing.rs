//! In-memory fakes for the port traits.
//!
//! Used by this crate's tests and, through the `testing` feature, by the
//! HTTP layer's router tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use folio_types::email::OutboundEmail;
use folio_types::error::{BackendError, EmailError};
use folio_types::query::TableQuery;

use crate::notify::Mailer;
use crate::repository::TableStore;

#[derive(Default)]
struct StoreState {
    tables: HashMap<String, Vec<serde_json::Value>>,
    inserted: Vec<(String, serde_json::Value)>,
    queries: Vec<TableQuery>,
    failing_selects: HashSet<String>,
    fail_inserts: bool,
}

/// Table store backed by a map. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, table: &str, rows: Vec<serde_json::Value>) -> Self {
        self.state
            .lock()
            .unwrap()
            .tables
            .insert(table.to_string(), rows);
        self
    }

    pub fn failing_select(self, table: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .failing_selects
            .insert(table.to_string());
        self
    }

    pub fn failing_inserts(self) -> Self {
        self.state.lock().unwrap().fail_inserts = true;
        self
    }

    pub fn inserted(&self) -> Vec<(String, serde_json::Value)> {
        self.state.lock().unwrap().inserted.clone()
    }

    pub fn queries(&self) -> Vec<TableQuery> {
        self.state.lock().unwrap().queries.clone()
    }
}

impl TableStore for MemoryStore {
    async fn select(&self, query: &TableQuery) -> Result<Vec<serde_json::Value>, BackendError> {
        let mut state = self.state.lock().unwrap();
        state.queries.push(query.clone());
        if state.failing_selects.contains(&query.table) {
            return Err(BackendError::Status {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        let mut rows = state.tables.get(&query.table).cloned().unwrap_or_default();
        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: serde_json::Value) -> Result<(), BackendError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_inserts {
            return Err(BackendError::Status {
                status: 401,
                message: "permission denied for table messages".to_string(),
            });
        }
        state.inserted.push((table.to_string(), row));
        Ok(())
    }
}

/// Mailer that records what it was asked to send.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Emails handed to the mailer, including ones it failed to send.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(EmailError::Rejected {
                status: 422,
                message: "domain is not verified".to_string(),
            });
        }
        Ok(())
    }
}
