//! OAuth device authorization flow.
//!
//! The user authorizes in a browser while we poll the token endpoint. Only
//! `authorization_pending` and `slow_down` are retryable; anything else
//! aborts the flow.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const CLIENT_ID: &str = "4c1ab28e770da3f09b52";
const DEVICE_CODE_URL: &str = "https://github.com/login/device/code";
const ACCESS_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
// Empty scope: read-only access to public information.
const SCOPE: &str = "";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("login endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response from login endpoint")]
    Malformed,
    #[error("authorization failed: {code}: {description}")]
    Denied { code: String, description: String },
}

#[derive(Debug, Deserialize)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_uri: String,
    interval: u64,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    #[serde(default)]
    error_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollDecision {
    RetryAfter(Duration),
    Abort,
}

/// Retry policy for the token poll loop: the server interval plus one second,
/// doubled every time the server answers `slow_down`.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    interval: Duration,
}

impl PollPolicy {
    pub fn new(server_interval_secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(server_interval_secs + 1),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn on_error(&mut self, code: &str) -> PollDecision {
        match code {
            "authorization_pending" => PollDecision::RetryAfter(self.interval),
            "slow_down" => {
                self.interval *= 2;
                PollDecision::RetryAfter(self.interval)
            }
            _ => PollDecision::Abort,
        }
    }
}

async fn post_login<T: for<'de> Deserialize<'de>>(
    client: &Client,
    url: &str,
    params: &[(&str, &str)],
) -> Result<T, AuthError> {
    let resp = client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(params)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AuthError::Status(status));
    }

    resp.json().await.map_err(|_| AuthError::Malformed)
}

async fn request_device_code(client: &Client) -> Result<DeviceCodeResponse, AuthError> {
    let resp: DeviceCodeResponse = post_login(
        client,
        DEVICE_CODE_URL,
        &[("client_id", CLIENT_ID), ("scope", SCOPE)],
    )
    .await?;
    if resp.device_code.is_empty() {
        return Err(AuthError::Malformed);
    }
    Ok(resp)
}

async fn poll_access_token(
    client: &Client,
    device: &DeviceCodeResponse,
) -> Result<String, AuthError> {
    let mut policy = PollPolicy::new(device.interval);
    loop {
        tokio::time::sleep(policy.interval()).await;

        let resp: AccessTokenResponse = post_login(
            client,
            ACCESS_TOKEN_URL,
            &[
                ("client_id", CLIENT_ID),
                ("device_code", device.device_code.as_str()),
                ("grant_type", GRANT_TYPE),
            ],
        )
        .await?;

        if let Some(token) = resp.access_token
            && !token.is_empty()
        {
            return Ok(token);
        }

        let code = resp.error.ok_or(AuthError::Malformed)?;
        debug!(code = %code, "Token poll not complete");
        match policy.on_error(&code) {
            PollDecision::RetryAfter(_) => continue,
            PollDecision::Abort => {
                return Err(AuthError::Denied {
                    code,
                    description: resp.error_description,
                });
            }
        }
    }
}

/// Walk the user through device authorization and return the access token.
/// Runs before the TUI starts, so plain stdout is fine here.
pub async fn authorize() -> Result<String, AuthError> {
    let client = Client::new();

    let device = request_device_code(&client).await?;
    println!("Enter this code: {}", device.user_code);
    println!("{}", device.verification_uri);
    if let Err(e) = crate::util::browser::open_url(&device.verification_uri) {
        debug!(error = %e, "Could not open browser; URI printed above");
    }

    poll_access_token(&client, &device).await
}
