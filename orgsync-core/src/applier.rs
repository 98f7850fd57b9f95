//! Sequential membership grants.
//!
//! One grant per missing login, strictly in input order, no retry. An HTTP
//! status other than 200 is recorded as a failure and the loop moves on; a
//! request that never produced a response aborts the pass.

use crate::api::MembershipApi;
use crate::error::SyncError;
use crate::types::{GrantOutcome, GrantResponse, Login, MemberRole, OrgName, SyncResult};

/// One processed entry of the missing list.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent<'a> {
    /// Zero-based position in the missing list.
    pub index: usize,
    pub login: &'a Login,
    pub outcome: GrantOutcome,
    pub response: &'a GrantResponse,
}

/// Receives applier progress.
///
/// `start` is called once before the first grant, `record` once per entry,
/// and `finish` once after the last entry. `finish` is not called when the
/// pass aborts.
pub trait ProgressSink {
    fn start(&mut self, total: usize);
    fn record(&mut self, event: &ProgressEvent<'_>);
    fn finish(&mut self, result: &SyncResult);
}

/// A sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _total: usize) {}
    fn record(&mut self, _event: &ProgressEvent<'_>) {}
    fn finish(&mut self, _result: &SyncResult) {}
}

/// Grant `member` role in `org` to every login in `missing`.
pub fn apply_missing(
    api: &dyn MembershipApi,
    org: &OrgName,
    missing: &[Login],
    sink: &mut dyn ProgressSink,
) -> Result<SyncResult, SyncError> {
    let mut result = SyncResult::default();
    sink.start(missing.len());

    for (index, login) in missing.iter().enumerate() {
        let response = api
            .set_membership(org, login, MemberRole::Member)
            .map_err(|source| SyncError::Grant {
                org: org.clone(),
                login: login.clone(),
                source,
            })?;

        let outcome = response.outcome();
        match outcome {
            GrantOutcome::Added => tracing::info!(org = %org, login = %login, "added member"),
            GrantOutcome::Failed { status } => {
                tracing::warn!(org = %org, login = %login, status, "failed to add member")
            }
        }
        result.record(outcome);
        sink.record(&ProgressEvent {
            index,
            login,
            outcome,
            response: &response,
        });
    }

    sink.finish(&result);
    Ok(result)
}
