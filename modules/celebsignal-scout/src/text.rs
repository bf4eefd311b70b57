use std::sync::LazyLock;

use regex::Regex;

static RE_MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[A-Za-z0-9]+").unwrap());
static RE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+://\S+").unwrap());
static RE_NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z\s]").unwrap());

/// Clean a post before scoring: drop @mentions and URLs as whole tokens, then
/// every character that is not ASCII alphanumeric or whitespace, then collapse
/// whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    let without_mentions = RE_MENTION.replace_all(text, "");
    let without_urls = RE_URL.replace_all(&without_mentions, "");
    let cleaned = RE_NOISE.replace_all(&without_urls, "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
