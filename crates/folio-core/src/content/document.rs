//! In-memory page document: named containers holding rendered nodes.
//!
//! Stands in for the browser DOM. Loaders never touch it directly; they
//! produce a [`RenderedSection`] which is then mounted into its container.

use std::collections::BTreeMap;

use folio_types::content::ContentKind;

/// Nodes rendered for one section, ready to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub kind: ContentKind,
    pub nodes: Vec<String>,
    /// True when the nodes are the load-error message rather than rows.
    pub failed: bool,
}

impl RenderedSection {
    pub fn container_id(&self) -> &'static str {
        self.kind.container_id()
    }

    /// Concatenated HTML of all nodes.
    pub fn to_html(&self) -> String {
        self.nodes.concat()
    }
}

/// A set of named containers.
#[derive(Debug, Clone, Default)]
pub struct Document {
    containers: BTreeMap<String, Vec<String>>,
}

impl Document {
    pub fn with_containers<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            containers: ids
                .into_iter()
                .map(|id| (id.to_string(), Vec::new()))
                .collect(),
        }
    }

    /// A document with one empty container per content section.
    pub fn portfolio() -> Self {
        Self::with_containers(ContentKind::ALL.iter().map(|kind| kind.container_id()))
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// Remove every child of a container. Returns false if it does not exist.
    pub fn clear(&mut self, id: &str) -> bool {
        match self.containers.get_mut(id) {
            Some(children) => {
                children.clear();
                true
            }
            None => false,
        }
    }

    /// Append a node to a container. Returns false if it does not exist.
    pub fn append(&mut self, id: &str, node: String) -> bool {
        match self.containers.get_mut(id) {
            Some(children) => {
                children.push(node);
                true
            }
            None => false,
        }
    }

    /// Replace a container's children with a rendered section.
    ///
    /// A missing container is a no-op.
    pub fn mount(&mut self, section: RenderedSection) {
        let id = section.container_id();
        if !self.clear(id) {
            tracing::debug!(container = id, "container not present, skipping mount");
            return;
        }
        for node in section.nodes {
            self.append(id, node);
        }
    }

    pub fn children(&self, id: &str) -> Option<&[String]> {
        self.containers.get(id).map(Vec::as_slice)
    }

    /// Concatenated HTML of a container's children.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.children(id).map(|children| children.concat())
    }

    /// Container id to inner HTML, for every container.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.containers
            .iter()
            .map(|(id, children)| (id.clone(), children.concat()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_replaces_existing_children() {
        let mut doc = Document::portfolio();
        doc.append("skills-list", "<li>stale</li>".to_string());

        doc.mount(RenderedSection {
            kind: ContentKind::Skills,
            nodes: vec!["<li>Rust</li>".to_string(), "<li>SQL</li>".to_string()],
            failed: false,
        });

        assert_eq!(
            doc.children("skills-list").unwrap(),
            ["<li>Rust</li>", "<li>SQL</li>"]
        );
    }

    #[test]
    fn test_mount_empty_section_leaves_container_empty() {
        let mut doc = Document::portfolio();
        doc.append("blog-list", "<div>old</div>".to_string());

        doc.mount(RenderedSection {
            kind: ContentKind::Blog,
            nodes: Vec::new(),
            failed: false,
        });

        assert_eq!(doc.inner_html("blog-list").unwrap(), "");
    }

    #[test]
    fn test_mount_missing_container_is_noop() {
        let mut doc = Document::with_containers(["project-list"]);
        doc.mount(RenderedSection {
            kind: ContentKind::Testimonials,
            nodes: vec!["<div>quote</div>".to_string()],
            failed: false,
        });
        assert!(!doc.has_container("testimonial-list"));
        assert_eq!(doc.to_map().len(), 1);
    }
}
