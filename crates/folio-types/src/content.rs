//! Read-only content rows rendered into the portfolio sections.
//!
//! The site does not own these tables; rows are decoded leniently (optional
//! columns default to `None`, unknown columns are ignored). Timestamps are
//! kept as the backend's text: ordering happens in the query, and a `date`
//! or `timestamp without time zone` column must not fail the row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::SortOrder;

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A skill with a self-assessed level on a 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Any JSON number; fractional levels are shown as stored.
    #[serde(default)]
    pub level: Option<f64>,
}

/// Primary key of a blog row. The backend may use integer or text keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{id}"),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

/// A blog post teaser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: RowId,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// External article URL. Blank or absent means the post lives on the
    /// site's own detail page.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl BlogPost {
    /// The external URL, if present and non-blank.
    pub fn external_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// A testimonial quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub message: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The four content sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Projects,
    Skills,
    Blog,
    Testimonials,
}

impl ContentKind {
    /// All sections, in page order.
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Projects,
        ContentKind::Skills,
        ContentKind::Blog,
        ContentKind::Testimonials,
    ];

    /// Backend table the section reads from.
    pub fn table(&self) -> &'static str {
        match self {
            ContentKind::Projects => "projects",
            ContentKind::Skills => "skills",
            ContentKind::Blog => "blog",
            ContentKind::Testimonials => "testimonials",
        }
    }

    /// Id of the page container the section renders into.
    pub fn container_id(&self) -> &'static str {
        match self {
            ContentKind::Projects => "project-list",
            ContentKind::Skills => "skills-list",
            ContentKind::Blog => "blog-list",
            ContentKind::Testimonials => "testimonial-list",
        }
    }

    /// Column and direction rows are ordered by.
    pub fn ordering(&self) -> (&'static str, SortOrder) {
        match self {
            ContentKind::Projects => ("created_at", SortOrder::Desc),
            ContentKind::Skills => ("level", SortOrder::Desc),
            ContentKind::Blog => ("published_at", SortOrder::Desc),
            ContentKind::Testimonials => ("created_at", SortOrder::Desc),
        }
    }

    /// User-visible message rendered when the section fails to load.
    pub fn load_error_text(&self) -> &'static str {
        match self {
            ContentKind::Projects => "❌ Failed to load projects.",
            ContentKind::Skills => "❌ Failed to load skills.",
            ContentKind::Blog => "❌ Failed to load blog posts.",
            ContentKind::Testimonials => "❌ Failed to load testimonials.",
        }
    }

    /// Look a section up by its container id.
    pub fn from_container_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.container_id() == id)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
