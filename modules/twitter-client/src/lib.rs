pub mod error;
pub mod oauth;
pub mod types;

pub use error::{Result, TwitterError};
pub use oauth::OAuthCredentials;
pub use types::{SearchResponse, Tweet, TweetUser};

use std::time::Duration;

use oauth::{authorization_header, percent_encode, RequestNonce};
use types::ErrorResponse;

const BASE_URL: &str = "https://api.twitter.com/1.1";

/// The standard search endpoint never returns more than this per page.
pub const MAX_SEARCH_COUNT: u32 = 100;

pub struct TwitterClient {
    client: reqwest::Client,
    credentials: OAuthCredentials,
    base_url: String,
}

impl TwitterClient {
    pub fn new(credentials: OAuthCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            credentials,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Search recent tweets matching `query`. Returns at most `limit` tweets
    /// (capped at [`MAX_SEARCH_COUNT`]); an empty result is not an error.
    pub async fn search_recent(&self, query: &str, limit: u32) -> Result<Vec<Tweet>> {
        let count = limit.clamp(1, MAX_SEARCH_COUNT);
        tracing::info!(query, count, "Searching recent tweets");

        let endpoint = format!("{}/search/tweets.json", self.base_url);
        let params = search_params(query, count);
        let auth = authorization_header(
            &self.credentials,
            "GET",
            &endpoint,
            &params,
            &RequestNonce::fresh(),
        )?;

        let resp = self
            .client
            .get(format!("{endpoint}?{}", encode_query(&params)))
            .header("Authorization", auth)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TwitterError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body = resp.text().await?;
        let mut tweets = serde_json::from_str::<SearchResponse>(&body)?.statuses;
        tweets.truncate(count as usize);

        tracing::info!(query, count = tweets.len(), "Fetched tweets");
        Ok(tweets)
    }
}

fn search_params(query: &str, count: u32) -> Vec<(String, String)> {
    vec![
        ("q".into(), query.to_string()),
        ("count".into(), count.to_string()),
        ("result_type".into(), "recent".into()),
        ("tweet_mode".into(), "extended".into()),
    ]
}

// Encoded the same way as the signature base string so the server sees
// exactly the parameters that were signed.
fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed
            .errors
            .iter()
            .map(|e| match e.code {
                Some(code) => format!("[{code}] {}", e.message),
                None => e.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.to_string(),
    }
}
