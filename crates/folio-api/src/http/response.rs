//! Success bodies.

use serde::Serialize;

use folio_core::contact::service::STORED_CONFIRMATION;

/// Body of a successful `POST /api/contact`.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

impl ContactResponse {
    pub fn stored() -> Self {
        Self {
            success: true,
            message: STORED_CONFIRMATION,
        }
    }
}
