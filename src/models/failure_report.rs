use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the downstream `failure_logs` table. Built per request,
/// forwarded at most once, never retained.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct FailureReport {
    pub machine: String,
    pub issue: String,
    pub date: DateTime<Utc>,
    pub operator_phone: Option<String>,
}
