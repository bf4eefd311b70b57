use serde::Deserialize;

/// Envelope returned by `search/tweets.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<Tweet>,
}

/// Author info nested inside a Tweet.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetUser {
    pub screen_name: Option<String>,
    pub name: Option<String>,
}

/// A single status from the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id_str: Option<String>,
    pub text: Option<String>,
    pub full_text: Option<String>,
    pub created_at: Option<String>,
    pub lang: Option<String>,
    pub user: Option<TweetUser>,
}

impl Tweet {
    /// Returns whichever text field is populated, preferring `full_text`.
    pub fn content(&self) -> Option<&str> {
        self.full_text.as_deref().or(self.text.as_deref())
    }
}

/// Twitter error envelope: `{"errors":[{"code":32,"message":"..."}]}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub code: Option<i64>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_prefers_full_text() {
        let json = r#"{"statuses":[
            {"id_str":"1","text":"short…","full_text":"the whole thing"},
            {"id_str":"2","text":"only text"},
            {"id_str":"3"}
        ]}"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let contents: Vec<_> = resp.statuses.iter().map(Tweet::content).collect();
        assert_eq!(contents, vec![Some("the whole thing"), Some("only text"), None]);
    }

    #[test]
    fn missing_statuses_is_empty() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.statuses.is_empty());
    }
}
