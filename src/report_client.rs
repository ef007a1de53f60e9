use reqwest::Client;

use crate::rest_client::{self, RestError};

/// Fetches rendered PDFs from the reports-service. The service checks a
/// bearer token; the gateway forwards the one it is configured with.
#[derive(Clone)]
pub struct ReportsClient {
    base_url: String,
    token: String,
    client: Client,
}

impl ReportsClient {
    pub fn new(base_url: &str, token: String) -> ReportsClient {
        ReportsClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client: Client::new(),
        }
    }

    pub async fn download(&self, path: &str, query: Option<&str>) -> Result<Vec<u8>, RestError> {
        let path = path.trim_start_matches('/');
        let url = match query {
            Some(q) if !q.is_empty() => format!("{}/{path}?{q}", self.base_url),
            _ => format!("{}/{path}", self.base_url),
        };
        let bearer = if self.token.is_empty() { None } else { Some(self.token.as_str()) };
        rest_client::get_bytes(&self.client, &url, bearer).await
    }
}
