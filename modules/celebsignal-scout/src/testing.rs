// Test mocks for the pipeline.
//
// Three mocks matching the three trait boundaries:
// - MockPageFetcher (PageFetcher): HashMap-based URL→HTML
// - MockPostSource (PostSource): HashMap-based query→posts, with per-query failures
// - FixedScorer (PolarityScorer): HashMap-based text→polarity
//
// Plus `listing_html` for building listing markup.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use celebsignal_common::{CelebSignalError, Result};

use crate::scoring::PolarityScorer;
use crate::traits::{PageFetcher, PostSource};

// ---------------------------------------------------------------------------
// MockPageFetcher
// ---------------------------------------------------------------------------

/// Returns `Err(Fetch)` for unregistered URLs.
#[derive(Default)]
pub struct MockPageFetcher {
    pages: HashMap<String, String>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), html.into());
        self
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn rendered_html(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| CelebSignalError::Fetch(format!("MockPageFetcher: no page registered for {url}")))
    }
}

// ---------------------------------------------------------------------------
// MockPostSource
// ---------------------------------------------------------------------------

/// Unregistered queries return no posts. Queries registered with `.failing()`
/// return `Err(Fetch)`. Every query and limit is recorded.
#[derive(Default)]
pub struct MockPostSource {
    posts: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_posts<S: Into<String>>(mut self, query: &str, posts: Vec<S>) -> Self {
        self.posts
            .insert(query.to_string(), posts.into_iter().map(Into::into).collect());
        self
    }

    pub fn failing(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostSource for MockPostSource {
    async fn recent_posts(&self, query: &str, limit: u32) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push((query.to_string(), limit));

        if self.failing.contains(query) {
            return Err(CelebSignalError::Fetch(format!(
                "MockPostSource: search failed for {query}"
            )));
        }

        let mut posts = self.posts.get(query).cloned().unwrap_or_default();
        posts.truncate(limit as usize);
        Ok(posts)
    }
}

// ---------------------------------------------------------------------------
// FixedScorer
// ---------------------------------------------------------------------------

/// Looks the (normalized) text up in a table; unknown text scores `default`.
pub struct FixedScorer {
    scores: HashMap<String, f64>,
    default: f64,
}

impl FixedScorer {
    pub fn constant(value: f64) -> Self {
        Self {
            scores: HashMap::new(),
            default: value,
        }
    }

    pub fn with(mut self, text: &str, value: f64) -> Self {
        self.scores.insert(text.to_string(), value);
        self
    }
}

impl PolarityScorer for FixedScorer {
    fn score(&self, text: &str) -> f64 {
        self.scores.get(text).copied().unwrap_or(self.default)
    }
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Listing markup in the default selector layout, one entry per
/// `(name, photo, "profession | work")` triple.
pub fn listing_html(entries: &[(&str, &str, &str)]) -> String {
    let items: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, (name, photo, details))| {
            format!(
                r#"<div class="lister-item mode-detail">
  <div class="lister-item-image"><a href="/name/nm{i}"><img alt="{name}" src="{photo}"></a></div>
  <div class="lister-item-content">
    <h3 class="lister-item-header"><span class="lister-item-index">{n}.</span> <a href="/name/nm{i}">{name}</a></h3>
    <p class="text-muted text-small">{details}</p>
  </div>
</div>"#,
                n = i + 1
            )
        })
        .collect();

    format!(
        "<html><body><div class=\"lister-list\">\n{}\n</div></body></html>",
        items.join("\n")
    )
}
