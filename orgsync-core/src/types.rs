//! Domain types for organization membership sync.
//!
//! Logins and organization names are opaque, case-sensitive strings; nothing
//! here interprets their structure.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A GitHub account login. Compared with exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Login(pub String);

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Login {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Login {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A GitHub organization name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgName(pub String);

impl fmt::Display for OrgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for OrgName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrgName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Role sent with a membership grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    #[default]
    Member,
    Admin,
}

impl MemberRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberRole::Member => "member",
            MemberRole::Admin => "admin",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single grant response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantOutcome {
    /// The remote answered with exactly [`GrantOutcome::SUCCESS_STATUS`].
    Added,
    /// Any other HTTP status.
    Failed { status: u16 },
}

impl GrantOutcome {
    pub const SUCCESS_STATUS: u16 = 200;

    pub fn from_status(status: u16) -> Self {
        if status == Self::SUCCESS_STATUS {
            GrantOutcome::Added
        } else {
            GrantOutcome::Failed { status }
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, GrantOutcome::Added)
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Raw response of a membership grant call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantResponse {
    pub status: u16,
    pub body: String,
}

impl GrantResponse {
    pub fn outcome(&self) -> GrantOutcome {
        GrantOutcome::from_status(self.status)
    }
}

/// Running tally of grant outcomes for one applier pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SyncResult {
    pub added: usize,
    pub failed: usize,
}

impl SyncResult {
    pub fn record(&mut self, outcome: GrantOutcome) {
        match outcome {
            GrantOutcome::Added => self.added += 1,
            GrantOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.added + self.failed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
