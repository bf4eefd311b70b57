pub mod error;

pub use error::{BrowserlessError, Result};

use std::time::Duration;

use serde::Serialize;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How long Browserless waits for the page's own scripts to settle, in ms.
const NAVIGATION_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentRequest<'a> {
    url: &'a str,
    goto_options: GotoOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    wait_for_selector: Option<WaitForSelector<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GotoOptions {
    wait_until: &'static str,
    timeout: u64,
}

#[derive(Debug, Serialize)]
struct WaitForSelector<'a> {
    selector: &'a str,
    timeout: u64,
}

pub struct BrowserlessClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    wait_for: Option<String>,
}

impl BrowserlessClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()).map(String::from),
            wait_for: None,
        })
    }

    /// Hold the snapshot until `selector` is present in the rendered DOM.
    pub fn with_wait_for(mut self, selector: &str) -> Self {
        self.wait_for = Some(selector.to_string());
        self
    }

    fn endpoint(&self) -> String {
        match self.token {
            Some(ref token) => format!("{}/content?token={token}", self.base_url),
            None => format!("{}/content", self.base_url),
        }
    }

    fn request_body<'a>(&'a self, url: &'a str) -> ContentRequest<'a> {
        ContentRequest {
            url,
            goto_options: GotoOptions {
                wait_until: "networkidle2",
                timeout: NAVIGATION_TIMEOUT_MS,
            },
            wait_for_selector: self.wait_for.as_deref().map(|selector| WaitForSelector {
                selector,
                timeout: NAVIGATION_TIMEOUT_MS,
            }),
        }
    }

    /// Fetch fully-rendered HTML content for a URL via the Browserless /content endpoint.
    pub async fn content(&self, url: &str) -> Result<String> {
        validate_url(url)?;

        tracing::debug!(url, wait_for = ?self.wait_for, "Requesting rendered content");

        let resp = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(&self.request_body(url))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(BrowserlessError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let html = resp.text().await?;
        if html.trim().is_empty() {
            return Err(BrowserlessError::EmptyContent(url.to_string()));
        }

        tracing::info!(url, bytes = html.len(), "Fetched rendered page");
        Ok(html)
    }
}

fn validate_url(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url).map_err(|e| BrowserlessError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(BrowserlessError::InvalidUrl {
            url: url.to_string(),
            reason: format!("only http/https URLs are allowed, got {other}"),
        }),
    }
}
