//! Paginated member listing.

use crate::api::MembershipApi;
use crate::error::SyncError;
use crate::types::{Login, OrgName};

/// GitHub's `per_page` ceiling for the members endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Collect every member login of `org`, page by page, in fetch order.
///
/// Fetching continues while the last page was exactly full and stops on the
/// first short or empty page, so an org whose size is an exact multiple of
/// `page_size` costs one extra request. Any page failure discards everything
/// fetched so far.
pub fn list_all_members(
    api: &dyn MembershipApi,
    org: &OrgName,
    page_size: u32,
) -> Result<Vec<Login>, SyncError> {
    if page_size == 0 {
        return Err(SyncError::InvalidPageSize);
    }

    let mut members = Vec::new();
    let mut page = 1;
    loop {
        let batch = api
            .list_members_page(org, page, page_size)
            .map_err(|source| SyncError::List {
                org: org.clone(),
                page,
                source,
            })?;
        let count = batch.len();
        tracing::debug!(org = %org, page, count, "fetched member page");
        members.extend(batch);

        if count != page_size as usize {
            break;
        }
        page += 1;
    }

    tracing::info!(org = %org, pages = page, total = members.len(), "listed members");
    Ok(members)
}
