use crate::models::response::WebhookResponse;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum RelibotError {
    #[error("body is not valid JSON: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },
    #[error("message text is missing or has no '|' separator")]
    BadFormat,
    #[error("failed to persist failure log: {source}")]
    Persist {
        #[from]
        source: reqwest::Error,
    },
}

/// Every error is terminal for its request: it resolves into exactly one
/// response here and is never retried or queued.
impl IntoResponse for RelibotError {
    fn into_response(self) -> Response {
        match self {
            err @ (Self::InvalidJson { .. } | Self::BadFormat) => {
                warn!("{err}");
                WebhookResponse::bad_format().into_response()
            }
            Self::Persist { source } => {
                error!(%source, "Failed to persist failure log");
                WebhookResponse::Fail {
                    error: source.to_string(),
                }
                .into_response()
            }
        }
    }
}
