//! Contact submission endpoint.
//!
//! POST /api/contact - Store a contact message and notify the site owner.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use tracing::Instrument;

use folio_types::contact::ContactRequest;

use crate::http::error::AppError;
use crate::http::response::ContactResponse;
use crate::state::AppState;

/// POST /api/contact
///
/// The body is parsed by hand so that malformed JSON gets the same
/// `{"error": ...}` shape as every other failure instead of axum's plain
/// text rejection.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let request_id = uuid::Uuid::now_v7();
    let span = tracing::info_span!("contact_submission", %request_id);

    async move {
        let request = parse_request(&body)?;
        let receipt = state.contact_service.submit(request).await?;
        tracing::info!(notification = ?receipt.notification, "contact message stored");
        Ok(Json(ContactResponse::stored()))
    }
    .instrument(span)
    .await
}

/// Any method other than POST on /api/contact.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn parse_request(body: &[u8]) -> Result<ContactRequest, AppError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(AppError::InvalidBody("body is not a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| AppError::InvalidBody(e.to_string()))
}
