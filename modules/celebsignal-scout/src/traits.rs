// Trait seams for the two external capabilities the pipeline calls out to.
//
// PageFetcher: rendered HTML for a URL (Browserless in production).
// PostSource: recent social posts matching a query (Twitter search).
//
// Tests swap in MockPageFetcher / MockPostSource from `testing`.

use async_trait::async_trait;

use browserless_client::BrowserlessClient;
use celebsignal_common::{CelebSignalError, Result};
use twitter_client::TwitterClient;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page after client-side scripts have run.
    async fn rendered_html(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait PostSource: Send + Sync {
    /// Up to `limit` recent post texts matching `query`, newest first.
    /// No matches is an empty vec, not an error.
    async fn recent_posts(&self, query: &str, limit: u32) -> Result<Vec<String>>;
}

#[async_trait]
impl PageFetcher for BrowserlessClient {
    async fn rendered_html(&self, url: &str) -> Result<String> {
        self.content(url)
            .await
            .map_err(|e| CelebSignalError::Fetch(format!("page {url}: {e}")))
    }
}

#[async_trait]
impl PostSource for TwitterClient {
    async fn recent_posts(&self, query: &str, limit: u32) -> Result<Vec<String>> {
        let tweets = self
            .search_recent(query, limit)
            .await
            .map_err(|e| CelebSignalError::Fetch(format!("tweets for {query:?}: {e}")))?;

        Ok(tweets
            .iter()
            .filter_map(|t| t.content())
            .map(str::to_string)
            .collect())
    }
}
