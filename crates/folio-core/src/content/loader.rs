//! Content loader: fetch one table, render its rows.
//!
//! Fetching and rendering are separate steps; [`render_rows`] is pure and
//! the loader only adds the query and the error path around it.

use folio_types::content::ContentKind;
use folio_types::query::TableQuery;

use crate::repository::TableStore;

use super::document::{Document, RenderedSection};
use super::render::{render_load_error, render_rows};

/// Default cap on blog posts shown in the blog section.
pub const DEFAULT_BLOG_LIMIT: u32 = 6;

/// Reads the four content tables and renders them.
pub struct ContentLoader<S: TableStore> {
    store: S,
    blog_limit: u32,
}

impl<S: TableStore> ContentLoader<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            blog_limit: DEFAULT_BLOG_LIMIT,
        }
    }

    pub fn with_blog_limit(mut self, limit: u32) -> Self {
        self.blog_limit = limit;
        self
    }

    /// The query issued for a section.
    pub fn query_for(&self, kind: ContentKind) -> TableQuery {
        let (column, order) = kind.ordering();
        let query = TableQuery::select_all(kind.table()).order_by(column, order);
        match kind {
            ContentKind::Blog => query.limit(self.blog_limit),
            _ => query,
        }
    }

    /// Fetch and render one section.
    ///
    /// Query and decode errors are logged and turned into the section's
    /// single error node. Zero rows render as an empty section.
    pub async fn load(&self, kind: ContentKind) -> RenderedSection {
        let query = self.query_for(kind);

        let rendered = match self.store.select(&query).await {
            Ok(rows) => render_rows(kind, rows).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match rendered {
            Ok(nodes) => {
                tracing::debug!(section = %kind, rows = nodes.len(), "section loaded");
                RenderedSection {
                    kind,
                    nodes,
                    failed: false,
                }
            }
            Err(error) => {
                tracing::error!(section = %kind, %error, "failed to load section");
                RenderedSection {
                    kind,
                    nodes: vec![render_load_error(kind)],
                    failed: true,
                }
            }
        }
    }

    /// Load every section concurrently. Results come back in page order.
    pub async fn load_all(&self) -> [RenderedSection; 4] {
        let (projects, skills, blog, testimonials) = tokio::join!(
            self.load(ContentKind::Projects),
            self.load(ContentKind::Skills),
            self.load(ContentKind::Blog),
            self.load(ContentKind::Testimonials),
        );
        [projects, skills, blog, testimonials]
    }

    /// Load every section and mount each into its container.
    pub async fn load_into(&self, document: &mut Document) {
        for section in self.load_all().await {
            document.mount(section);
        }
    }
}
