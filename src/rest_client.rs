use std::time::Instant;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::log;

#[derive(thiserror::Error, Debug)]
pub enum RestError {
    /// The request never completed (network, DNS, timeout).
    #[error("request failed for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    /// The service answered with a non-success status.
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: StatusCode, message: String },

    /// The body could not be read or decoded.
    #[error("failed to decode response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

impl RestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Status { status, .. } => *status,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    /// Most specific message available for the UI: structured server error
    /// text, server message field, transport error, "unknown error".
    pub fn user_message(&self) -> String {
        match self {
            RestError::Status { message, status, .. } => {
                if message.is_empty() {
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| "unknown error".to_string())
                } else {
                    message.clone()
                }
            }
            RestError::Transport { source, .. } | RestError::Decode { source, .. } => source.to_string(),
        }
    }
}

/// Error-body contract of the backend services: `error` field first,
/// `message` field second.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"].iter().find_map(|key| {
        value
            .get(key)
            .and_then(|e| e.as_str())
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
    })
}

async fn check(url: &str, rsp: Result<Response, reqwest::Error>) -> Result<Response, RestError> {
    let rsp = rsp.map_err(|source| RestError::Transport { url: url.to_string(), source })?;
    let status = rsp.status();
    if status.is_success() {
        return Ok(rsp);
    }
    let body = rsp.text().await.unwrap_or_default();
    Err(RestError::Status {
        url: url.to_string(),
        status,
        message: extract_error_message(&body).unwrap_or_default(),
    })
}

async fn decode<T: DeserializeOwned>(url: &str, rsp: Response) -> Result<T, RestError> {
    rsp.json()
        .await
        .map_err(|source| RestError::Decode { url: url.to_string(), source })
}

pub async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, RestError> {
    let before = Instant::now();
    let rsp = check(url, client.get(url).send().await).await?;
    let res = decode(url, rsp).await;
    log::info!("[REST] GET {url} {:.2?}", before.elapsed());
    res
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<T, RestError> {
    let before = Instant::now();
    let rsp = check(url, client.post(url).json(body).send().await).await?;
    let res = decode(url, rsp).await;
    log::info!("[REST] POST {url} {:.2?}", before.elapsed());
    res
}

pub async fn post_unit<B: Serialize>(client: &Client, url: &str, body: &B) -> Result<(), RestError> {
    let before = Instant::now();
    check(url, client.post(url).json(body).send().await).await?;
    log::info!("[REST] POST {url} {:.2?}", before.elapsed());
    Ok(())
}

pub async fn put_unit<B: Serialize>(client: &Client, url: &str, body: &B) -> Result<(), RestError> {
    let before = Instant::now();
    check(url, client.put(url).json(body).send().await).await?;
    log::info!("[REST] PUT {url} {:.2?}", before.elapsed());
    Ok(())
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    client: &Client,
    url: &str,
    body: &B,
) -> Result<T, RestError> {
    let before = Instant::now();
    let rsp = check(url, client.patch(url).json(body).send().await).await?;
    let res = decode(url, rsp).await;
    log::info!("[REST] PATCH {url} {:.2?}", before.elapsed());
    res
}

pub async fn get_bytes(client: &Client, url: &str, bearer: Option<&str>) -> Result<Vec<u8>, RestError> {
    let before = Instant::now();
    let mut req = client.get(url);
    if let Some(token) = bearer {
        req = req.bearer_auth(token);
    }
    let rsp = check(url, req.send().await).await?;
    let res = rsp
        .bytes()
        .await
        .map(|e| e.to_vec())
        .map_err(|source| RestError::Decode { url: url.to_string(), source });
    log::info!("[REST] GET {url} {:.2?}", before.elapsed());
    res
}
