//! The remote membership port.

use crate::error::ApiError;
use crate::types::{GrantResponse, Login, MemberRole, OrgName};

/// Organization membership capabilities consumed by the sync pipeline.
///
/// Calls are blocking and issued one at a time.
pub trait MembershipApi {
    /// Fetch one page (1-based) of member logins for `org`.
    fn list_members_page(
        &self,
        org: &OrgName,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Login>, ApiError>;

    /// Add or update `login`'s membership in `org`.
    ///
    /// Any HTTP response, success or not, is returned as `Ok`. `Err` is
    /// reserved for requests that produced no response at all.
    fn set_membership(
        &self,
        org: &OrgName,
        login: &Login,
        role: MemberRole,
    ) -> Result<GrantResponse, ApiError>;
}
