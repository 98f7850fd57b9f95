//! Core library for orgsync: membership port, pagination, diffing, and the
//! grant loop.
//!
//! Public API surface:
//! - [`types`]: newtypes and result structs
//! - [`api`]: [`MembershipApi`], the port the GitHub adapter implements
//! - [`lister`]: paginated member listing
//! - [`diff`]: ordered set difference of two member lists
//! - [`applier`]: sequential membership grants with progress events
//! - [`pipeline`]: plan / apply entrypoints used by the CLI

pub mod api;
pub mod applier;
pub mod diff;
pub mod error;
pub mod lister;
pub mod pipeline;
pub mod types;


pub use api::MembershipApi;
pub use applier::{apply_missing, NoProgress, ProgressEvent, ProgressSink};
pub use diff::find_missing;
pub use error::{ApiError, SyncError};
pub use lister::{list_all_members, DEFAULT_PAGE_SIZE};
pub use pipeline::SyncPlan;
pub use types::{GrantOutcome, GrantResponse, Login, MemberRole, OrgName, SyncResult};
