use crate::models::error::RelibotError;
use crate::models::failure_report::FailureReport;
use crate::AppState;
use secrecy::ExposeSecret;
use tracing::{debug, info};

/// Inserts one row into the `failure_logs` table through the Supabase
/// REST interface.
///
/// One attempt, no retry: network errors, timeouts, and non-2xx statuses
/// all come back as the same `Persist` error for the handler to surface.
#[tracing::instrument(skip(state))]
pub async fn insert_failure_log(
    state: &AppState,
    report: &FailureReport,
) -> Result<(), RelibotError> {
    let url = format!(
        "{}/rest/v1/failure_logs",
        state.supabase_url.trim_end_matches('/')
    );
    debug!(url, "Inserting failure log");

    let response = state
        .reqwest_client
        .post(&url)
        .header("apikey", state.anon_key.expose_secret())
        .bearer_auth(state.service_role_key.expose_secret())
        .json(report)
        .send()
        .await?
        .error_for_status()?;

    info!(
        status = %response.status(),
        machine = %report.machine,
        "Inserted failure log"
    );
    Ok(())
}
