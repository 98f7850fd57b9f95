//! # orgsync-github
//!
//! Blocking GitHub REST adapter for [`orgsync_core::MembershipApi`].
//!
//! ```text
//! GET {base}/orgs/{org}/members?page={n}&per_page={size}
//! PUT {base}/orgs/{org}/memberships/{login}   {"role": "member"}
//! ```

use std::time::Duration;

use serde::Deserialize;

use orgsync_core::{ApiError, GrantResponse, Login, MemberRole, MembershipApi, OrgName};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const IO_TIMEOUT: Duration = Duration::from_secs(60);

/// A member entry from the list endpoint; every other field is ignored.
#[derive(Debug, Deserialize)]
struct MemberEntry {
    login: String,
}

/// GitHub client bound to one API base URL and credential.
#[derive(Clone)]
pub struct GithubClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Build a client for `base_url`. An empty `token` is treated as absent;
    /// requests then go out unauthenticated and the remote decides.
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("orgsync/", env!("CARGO_PKG_VERSION")))
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(IO_TIMEOUT)
            .timeout_write(IO_TIMEOUT)
            .build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn members_url(&self, org: &OrgName) -> String {
        format!("{}/orgs/{}/members", self.base_url, org)
    }

    fn membership_url(&self, org: &OrgName, login: &Login) -> String {
        format!("{}/orgs/{}/memberships/{}", self.base_url, org, login)
    }

    fn request(&self, method: &str, url: &str) -> ureq::Request {
        let request = self
            .agent
            .request(method, url)
            .set("Accept", ACCEPT)
            .set("X-GitHub-Api-Version", API_VERSION);
        match &self.token {
            Some(token) => request.set("Authorization", &format!("token {token}")),
            None => request,
        }
    }
}

impl MembershipApi for GithubClient {
    fn list_members_page(
        &self,
        org: &OrgName,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Login>, ApiError> {
        let response = self
            .request("GET", &self.members_url(org))
            .query("page", &page.to_string())
            .query("per_page", &per_page.to_string())
            .call()
            .map_err(list_error)?;
        let body = response
            .into_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_members(&body)
    }

    fn set_membership(
        &self,
        org: &OrgName,
        login: &Login,
        role: MemberRole,
    ) -> Result<GrantResponse, ApiError> {
        let result = self
            .request("PUT", &self.membership_url(org, login))
            .send_json(serde_json::json!({ "role": role.as_str() }));
        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(ApiError::Transport(transport.to_string()))
            }
        };
        let grant = read_grant(response);
        tracing::debug!(org = %org, login = %login, status = grant.status, "membership response");
        Ok(grant)
    }
}

fn list_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(status, response) => ApiError::Status {
            status,
            body: response.into_string().unwrap_or_default(),
        },
        ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
    }
}

fn read_grant(response: ureq::Response) -> GrantResponse {
    let status = response.status();
    GrantResponse {
        status,
        body: response.into_string().unwrap_or_default(),
    }
}

fn decode_members(body: &str) -> Result<Vec<Login>, ApiError> {
    let entries: Vec<MemberEntry> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(entries.into_iter().map(|m| Login(m.login)).collect())
}
