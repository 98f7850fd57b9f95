//! Error types for orgsync-core.

use thiserror::Error;

use crate::types::{Login, OrgName};

/// Failures reported by a [`crate::MembershipApi`] implementation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The remote answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No HTTP response was received (DNS, connect, TLS, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// All errors that abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A member listing page request failed. No partial list is returned.
    #[error("failed to list members of '{org}' (page {page}): {source}")]
    List {
        org: OrgName,
        page: u32,
        #[source]
        source: ApiError,
    },

    /// A grant request failed below the HTTP layer.
    #[error("failed to grant membership in '{org}' to '{login}': {source}")]
    Grant {
        org: OrgName,
        login: Login,
        #[source]
        source: ApiError,
    },

    /// Pagination needs a page size of at least one.
    #[error("page size must be at least 1")]
    InvalidPageSize,
}
