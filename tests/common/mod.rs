// Shared helpers for integration tests: run the binary, fake the status API.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const REPO: &str = "octo/hello";
pub const SHA: &str = "0123456789abcdef0123456789abcdef01234567";

/// Environment variables the binary reads; cleared so the host CI cannot leak in.
const AMBIENT_VARS: &[&str] = &[
    "GITHUB_URL",
    "GITHUB_USERNAME",
    "GITHUB_PASSWORD",
    "GITHUB_REPO",
    "GITHUB_SHA",
    "TARGET_URL",
    "JENKINS_URL",
    "BUILD_URL",
    "RUST_LOG",
];

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_ghstatus"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Output of one binary run.
pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Runs the binary with `args`, extra `envs`, and an optional working directory.
pub fn run_in(args: &[&str], envs: &[(&str, &str)], cwd: Option<&Path>) -> Run {
    let mut cmd = Command::new(binary_path());
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for var in AMBIENT_VARS {
        cmd.env_remove(var);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().expect("failed to execute binary");
    Run {
        stdout: String::from_utf8(output.stdout).expect("stdout not valid UTF-8"),
        stderr: String::from_utf8(output.stderr).expect("stderr not valid UTF-8"),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

pub fn run(args: &[&str]) -> Run {
    run_in(args, &[], None)
}

/// Runs the binary against `server` with explicit repo and sha.
pub fn run_against(server: &MockServer, args: &[&str], envs: &[(&str, &str)]) -> Run {
    let uri = server.uri();
    let mut full = vec!["--base-url", uri.as_str(), "--repo", REPO, "--sha", SHA];
    full.extend_from_slice(args);
    run_in(&full, envs, None)
}

/// In-memory status API: POSTed statuses are listed by the combined endpoint.
#[derive(Clone, Default)]
pub struct StatusStore {
    created: Arc<Mutex<Vec<Value>>>,
}

impl StatusStore {
    /// Every status POSTed so far, oldest first.
    pub fn created(&self) -> Vec<Value> {
        self.created.lock().unwrap().clone()
    }

    /// States of every POSTed status, oldest first.
    pub fn states(&self) -> Vec<String> {
        self.created()
            .iter()
            .map(|s| s["state"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Latest status per context, newest first, like the combined endpoint.
    fn combined(&self) -> Value {
        let mut seen: Vec<String> = Vec::new();
        let mut statuses = Vec::new();
        for status in self.created().into_iter().rev() {
            let context = status["context"].as_str().unwrap_or_default().to_string();
            if !seen.contains(&context) {
                seen.push(context);
                statuses.push(status);
            }
        }
        json!({"sha": SHA, "total_count": statuses.len(), "statuses": statuses})
    }
}

struct CreateStatus(StatusStore);

impl Respond for CreateStatus {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400),
        };
        body["id"] = json!(self.0.created.lock().unwrap().len() + 1);
        if body.get("target_url").is_none() {
            body["target_url"] = Value::Null;
        }
        self.0.created.lock().unwrap().push(body.clone());
        ResponseTemplate::new(201).set_body_json(body)
    }
}

struct ListStatuses(StatusStore);

impl Respond for ListStatuses {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(self.0.combined())
    }
}

/// Starts a mock API serving the status endpoints for [`REPO`]@[`SHA`].
pub async fn status_api() -> (MockServer, StatusStore) {
    let server = MockServer::start().await;
    let store = StatusStore::default();

    Mock::given(method("POST"))
        .and(path(format!("/repos/{REPO}/statuses/{SHA}")))
        .respond_with(CreateStatus(store.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/commits/{SHA}/status")))
        .respond_with(ListStatuses(store.clone()))
        .mount(&server)
        .await;

    (server, store)
}

/// Starts a mock API that rejects every request with `status`.
pub async fn failing_api(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(
            ResponseTemplate::new(status).set_body_string(r#"{"message":"Not Found"}"#),
        )
        .mount(&server)
        .await;
    server
}

/// Whether a usable `git` binary is on PATH.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Runs git in `dir` with a fixed identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(["-c", "user.name=ghstatus", "-c", "user.email=ghstatus@example.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
