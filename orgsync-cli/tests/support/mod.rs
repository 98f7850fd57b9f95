//! A throwaway GitHub API stand-in bound to 127.0.0.1.
//!
//! Serves `GET /orgs/{org}/members` with page/per_page slicing and
//! `PUT /orgs/{org}/memberships/{login}`. Every request is recorded. A 200
//! grant appends the login to the org, so a second run sees the first run's
//! writes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Default)]
struct StubState {
    orgs: HashMap<String, Vec<String>>,
    grant_status: HashMap<String, u16>,
    requests: Vec<Recorded>,
}

pub struct StubGithub {
    addr: SocketAddr,
    state: Arc<Mutex<StubState>>,
}

impl StubGithub {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let state = Arc::new(Mutex::new(StubState::default()));
        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let _ = handle(stream, &shared);
            }
        });
        Self { addr, state }
    }

    pub fn with_org(self, org: &str, members: &[&str]) -> Self {
        self.state.lock().expect("stub state").orgs.insert(
            org.to_string(),
            members.iter().map(|m| m.to_string()).collect(),
        );
        self
    }

    pub fn with_generated_org(self, org: &str, count: usize) -> Self {
        let members: Vec<String> = (0..count).map(|i| format!("user-{i:04}")).collect();
        self.state
            .lock()
            .expect("stub state")
            .orgs
            .insert(org.to_string(), members);
        self
    }

    pub fn grant_status(self, login: &str, status: u16) -> Self {
        self.state
            .lock()
            .expect("stub state")
            .grant_status
            .insert(login.to_string(), status);
        self
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().expect("stub state").requests.clone()
    }

    pub fn grant_paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "PUT")
            .map(|r| r.path)
            .collect()
    }

    pub fn members(&self, org: &str) -> Vec<String> {
        self.state
            .lock()
            .expect("stub state")
            .orgs
            .get(org)
            .cloned()
            .unwrap_or_default()
    }
}

fn handle(stream: TcpStream, state: &Mutex<StubState>) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "authorization" => authorization = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;
    let body = String::from_utf8_lossy(&body).into_owned();

    let (path, query) = target.split_once('?').unwrap_or((target.as_str(), ""));
    let (status, payload) = {
        let mut state = state.lock().expect("stub state");
        state.requests.push(Recorded {
            method: method.clone(),
            path: path.to_string(),
            query: query.to_string(),
            authorization,
            body,
        });
        respond(&mut state, &method, path, query)
    };

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        reason(status),
        payload.len()
    )?;
    stream.flush()
}

fn respond(state: &mut StubState, method: &str, path: &str, query: &str) -> (u16, String) {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match (method, segments.as_slice()) {
        ("GET", ["orgs", org, "members"]) => {
            let page = query_param(query, "page").unwrap_or(1).max(1);
            let per_page = query_param(query, "per_page").unwrap_or(30);
            match state.orgs.get(*org) {
                None => (404, json!({ "message": "Not Found" }).to_string()),
                Some(members) => {
                    let entries: Vec<Value> = members
                        .iter()
                        .skip((page - 1) * per_page)
                        .take(per_page)
                        .map(|login| json!({ "login": login, "type": "User" }))
                        .collect();
                    (200, Value::Array(entries).to_string())
                }
            }
        }
        ("PUT", ["orgs", org, "memberships", login]) => {
            let status = state.grant_status.get(*login).copied().unwrap_or(200);
            if status == 200 {
                let members = state.orgs.entry(org.to_string()).or_default();
                if !members.iter().any(|m| m == login) {
                    members.push(login.to_string());
                }
                (
                    200,
                    json!({ "state": "active", "role": "member", "user": { "login": login } })
                        .to_string(),
                )
            } else {
                (status, json!({ "message": "Validation Failed" }).to_string())
            }
        }
        _ => (404, json!({ "message": "Not Found" }).to_string()),
    }
}

fn query_param(query: &str, name: &str) -> Option<usize> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| value.parse().ok())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        _ => "Error",
    }
}
