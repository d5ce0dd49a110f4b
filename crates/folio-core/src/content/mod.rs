//! Content sections: loader, pure renderers and the page document they are
//! mounted into.

pub mod document;
pub mod loader;
pub mod render;

pub use document::{Document, RenderedSection};
pub use loader::ContentLoader;
