use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The three bodies this service ever answers the webhook caller with.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WebhookResponse {
    Ok { machine: String, issue: String },
    Ignored { reason: String },
    Fail { error: String },
}

impl WebhookResponse {
    #[must_use]
    pub fn bad_format() -> Self {
        Self::Ignored {
            reason: "bad format".to_string(),
        }
    }

    const fn status_code(&self) -> StatusCode {
        match self {
            Self::Ok { .. } => StatusCode::OK,
            Self::Ignored { .. } => StatusCode::BAD_REQUEST,
            Self::Fail { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebhookResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
