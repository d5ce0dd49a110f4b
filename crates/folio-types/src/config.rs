//! Non-secret site configuration.
//!
//! `SiteConfig` represents the optional `config.toml` that controls where the
//! server listens, how many blog posts are shown, and where the static site
//! and contact endpoint live. Credentials never go in this file; they are
//! read from the environment.

use serde::{Deserialize, Serialize};

/// Top-level site configuration. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of blog posts rendered in the blog section.
    #[serde(default = "default_blog_limit")]
    pub blog_limit: u32,

    /// Directory holding the static front end (index.html, assets).
    #[serde(default = "default_web_dir")]
    pub web_dir: String,

    /// Contact endpoint the form controller posts to.
    #[serde(default = "default_contact_endpoint")]
    pub contact_endpoint: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_blog_limit() -> u32 {
    6
}

fn default_web_dir() -> String {
    "public".to_string()
}

fn default_contact_endpoint() -> String {
    "http://127.0.0.1:3000/api/contact".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            blog_limit: default_blog_limit(),
            web_dir: default_web_dir(),
            contact_endpoint: default_contact_endpoint(),
        }
    }
}
