use axum::http::StatusCode;

#[tracing::instrument]
pub async fn ping_handler() -> StatusCode {
    StatusCode::OK
}
