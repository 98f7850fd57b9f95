//! Shared fetch → diff → apply entrypoints.
//!
//! [`plan`] does all the reading, [`apply`] does all the writing. The CLI
//! reports between the two and stops after [`plan`] for `--dry-run`.

use crate::api::MembershipApi;
use crate::applier::{apply_missing, ProgressSink};
use crate::diff::find_missing;
use crate::error::SyncError;
use crate::lister::list_all_members;
use crate::types::{Login, OrgName, SyncResult};

/// Both member lists and the gap between them, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    pub source: OrgName,
    pub target: OrgName,
    pub source_members: Vec<Login>,
    pub target_members: Vec<Login>,
    pub missing: Vec<Login>,
}

impl SyncPlan {
    /// `true` when the target already has every source member.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }
}

/// List both organizations and compute the logins `target` is missing.
///
/// The source is listed first; a listing failure of either org aborts.
pub fn plan(
    api: &dyn MembershipApi,
    source: &OrgName,
    target: &OrgName,
    page_size: u32,
) -> Result<SyncPlan, SyncError> {
    let source_members = list_all_members(api, source, page_size)?;
    let target_members = list_all_members(api, target, page_size)?;
    let missing = find_missing(&source_members, &target_members);
    tracing::info!(
        source = %source,
        target = %target,
        missing = missing.len(),
        "computed membership gap"
    );

    Ok(SyncPlan {
        source: source.clone(),
        target: target.clone(),
        source_members,
        target_members,
        missing,
    })
}

/// Grant target membership to every login in `plan.missing`.
pub fn apply(
    api: &dyn MembershipApi,
    plan: &SyncPlan,
    sink: &mut dyn ProgressSink,
) -> Result<SyncResult, SyncError> {
    apply_missing(api, &plan.target, &plan.missing, sink)
}
