use crate::models::failure_report::FailureReport;
use chrono::{DateTime, Utc};
use tap::Tap;
use tracing::debug;

/// Turns a `machine|issue` message into a report stamped with `date`.
///
/// Splits on the first `|` only; any further `|` characters stay in the
/// issue verbatim. Both sides are trimmed. The delimiter is the only
/// gate: a side that trims down to empty is still accepted.
#[tracing::instrument]
pub fn parse_report(
    text: &str,
    operator_phone: Option<String>,
    date: DateTime<Utc>,
) -> Option<FailureReport> {
    text.split_once('|').map(|(machine, issue)| {
        FailureReport {
            machine: machine.trim().to_string(),
            issue: issue.trim().to_string(),
            date,
            operator_phone,
        }
        .tap(|report| debug!(?report, "Parsed failure report"))
    })
}
