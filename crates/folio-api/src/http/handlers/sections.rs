//! Rendered content sections.
//!
//! GET /api/sections             - Every section, keyed by container id.
//! GET /api/sections/{container} - One section as an HTML fragment.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;

use folio_core::content::Document;
use folio_types::content::ContentKind;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /api/sections
///
/// Runs the four loaders concurrently and returns each container's HTML.
/// A failed section carries its error node; the response is still 200.
pub async fn list_sections(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    let mut document = Document::portfolio();
    state.content_loader.load_into(&mut document).await;
    Json(document.to_map())
}

/// GET /api/sections/{container}
pub async fn get_section(
    State(state): State<AppState>,
    Path(container): Path<String>,
) -> Result<Html<String>, AppError> {
    let kind = ContentKind::from_container_id(&container)
        .ok_or_else(|| AppError::UnknownSection(container.clone()))?;
    let section = state.content_loader.load(kind).await;
    Ok(Html(section.to_html()))
}
