use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::error::{Error, Result};

use super::CsvSource;

/// Fetches CSV files over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    http: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CsvSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        info!(url, "fetching csv");

        let request_error = |source: reqwest::Error| Error::Request { url: url.to_string(), source };

        let res = self.http.get(url).send().await.map_err(request_error)?;

        let status = res.status();
        let body = res.text().await.map_err(request_error)?;

        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("404: Not Found"), "404: Not Found");
    }

    #[test]
    fn truncate_body_cuts_long_bodies_on_char_boundary() {
        let body = "é".repeat(300);
        let out = truncate_body(&body);

        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
    }
}
