use crate::models::error::RelibotError;
use crate::models::payload::InboundMessage;
use crate::models::response::WebhookResponse;
use crate::services::failure_report::parse_report;
use crate::services::supabase::insert_failure_log;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::Value;
use tracing::info;

/// At most one outbound call per request; repeated deliveries are not
/// deduplicated and insert independent records.
#[tracing::instrument(skip(state, body))]
pub async fn webhook_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, RelibotError> {
    let value: Value = serde_json::from_str(&body)?;
    let inbound = InboundMessage::from_value(&value);
    info!(has_text = inbound.text.is_some(), "Got inbound message");

    let text = inbound.text.ok_or(RelibotError::BadFormat)?;
    let report =
        parse_report(&text, inbound.operator_phone, Utc::now()).ok_or(RelibotError::BadFormat)?;

    insert_failure_log(&state, &report).await?;

    Ok(WebhookResponse::Ok {
        machine: report.machine,
        issue: report.issue,
    })
}
