//! Table-scoped select queries against the data backend.
//!
//! Mirrors the subset of the backend's query API the site uses: select all
//! columns from one table, optionally ordered by a single column and capped
//! at a row count.

use std::fmt;

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Query-string suffix understood by the backend (`asc` / `desc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering by one named column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub column: String,
    pub order: SortOrder,
}

/// A `select *` query against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    pub ordering: Option<Ordering>,
    pub limit: Option<u32>,
}

impl TableQuery {
    /// Select every column of `table`, unordered and unlimited.
    pub fn select_all(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ordering: None,
            limit: None,
        }
    }

    pub fn order_by(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.ordering = Some(Ordering {
            column: column.into(),
            order,
        });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
