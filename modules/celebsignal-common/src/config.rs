use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CelebSignalError, Result};

pub const DEFAULT_LISTING_URL: &str = "http://m.imdb.com/feature/bornondate";
pub const DEFAULT_LISTING_LIMIT: usize = 10;
pub const DEFAULT_POST_LIMIT: u32 = 100;

/// Application configuration loaded from environment variables.
/// Secrets live in the separate credentials file, see [`Credentials`].
#[derive(Debug, Clone)]
pub struct Config {
    // Scraping
    pub listing_url: String,
    pub listing_limit: usize,
    pub browserless_url: String,
    pub browserless_token: Option<String>,

    // Social search
    pub post_limit: u32,
    pub credentials_path: PathBuf,
    pub isolate_subject_failures: bool,

    // Storage / output
    pub database_path: PathBuf,
    pub results_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let post_limit: u32 = parse_or(&get, "POST_LIMIT", DEFAULT_POST_LIMIT)?;
        let listing_limit: usize = parse_or(&get, "LISTING_LIMIT", DEFAULT_LISTING_LIMIT)?;
        if listing_limit == 0 {
            return Err(CelebSignalError::Config(
                "LISTING_LIMIT must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            listing_url: get("LISTING_URL").unwrap_or_else(|| DEFAULT_LISTING_URL.to_string()),
            listing_limit,
            browserless_url: get("BROWSERLESS_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            browserless_token: get("BROWSERLESS_TOKEN"),
            post_limit: post_limit.clamp(1, DEFAULT_POST_LIMIT),
            credentials_path: get("CREDENTIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("twitter_api_keys.json")),
            isolate_subject_failures: parse_or(&get, "ISOLATE_SUBJECT_FAILURES", false)?,
            database_path: get("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/celebData.db")),
            results_dir: get("RESULTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("results")),
        })
    }

    pub fn log_keys(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  LISTING_URL: {}", self.listing_url);
        tracing::info!("  LISTING_LIMIT: {}", self.listing_limit);
        tracing::info!("  BROWSERLESS_URL: {}", self.browserless_url);
        tracing::info!(
            "  BROWSERLESS_TOKEN: {}",
            preview_opt(&self.browserless_token)
        );
        tracing::info!("  POST_LIMIT: {}", self.post_limit);
        tracing::info!("  CREDENTIALS_PATH: {}", self.credentials_path.display());
        tracing::info!("  ISOLATE_SUBJECT_FAILURES: {}", self.isolate_subject_failures);
        tracing::info!("  DATABASE_PATH: {}", self.database_path.display());
        tracing::info!("  RESULTS_DIR: {}", self.results_dir.display());
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            CelebSignalError::Config(format!("{key} has invalid value {raw:?}: {e}"))
        }),
        None => Ok(default),
    }
}

fn preview(val: &str) -> String {
    let n = val.chars().take(5).map(char::len_utf8).sum::<usize>();
    format!("{}...({} chars)", &val[..n], val.len())
}

fn preview_opt(val: &Option<String>) -> String {
    match val {
        Some(v) if !v.is_empty() => preview(v),
        _ => "<not set>".to_string(),
    }
}

/// The four secrets needed for user-context social search, read from a JSON file:
///
/// ```json
/// { "consumer_key": "...", "consumer_secret": "...",
///   "access_token": "...", "access_token_secret": "..." }
/// ```
#[derive(Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

#[derive(Deserialize)]
struct RawCredentials {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    access_token: Option<String>,
    access_token_secret: Option<String>,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CelebSignalError::Config(format!(
                    "Twitter API keys file not found: {}",
                    path.display()
                ))
            } else {
                CelebSignalError::Config(format!(
                    "could not read Twitter API keys file {}: {e}",
                    path.display()
                ))
            }
        })?;

        Self::parse(&contents).map_err(|e| match e {
            CelebSignalError::Config(msg) => {
                CelebSignalError::Config(format!("{msg} (in {})", path.display()))
            }
            other => other,
        })
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawCredentials = serde_json::from_str(contents)
            .map_err(|e| CelebSignalError::Config(format!("malformed Twitter API keys file: {e}")))?;

        Ok(Self {
            consumer_key: required(raw.consumer_key, "consumer_key")?,
            consumer_secret: required(raw.consumer_secret, "consumer_secret")?,
            access_token: required(raw.access_token, "access_token")?,
            access_token_secret: required(raw.access_token_secret, "access_token_secret")?,
        })
    }

    pub fn log_keys(&self) {
        tracing::info!("Credentials loaded:");
        tracing::info!("  consumer_key: {}", preview(&self.consumer_key));
        tracing::info!("  access_token: {}", preview(&self.access_token));
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &preview(&self.consumer_key))
            .field("access_token", &preview(&self.access_token))
            .finish_non_exhaustive()
    }
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CelebSignalError::Config(format!(
            "appropriate Twitter API key {key:?} not found in keys file"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.listing_url, DEFAULT_LISTING_URL);
        assert_eq!(config.listing_limit, 10);
        assert_eq!(config.post_limit, 100);
        assert_eq!(config.database_path, PathBuf::from("data/celebData.db"));
        assert_eq!(config.results_dir, PathBuf::from("results"));
        assert_eq!(config.credentials_path, PathBuf::from("twitter_api_keys.json"));
        assert!(!config.isolate_subject_failures);
        assert!(config.browserless_token.is_none());
    }

    #[test]
    fn overrides_are_read_and_post_limit_is_capped() {
        let config = Config::from_lookup(lookup(&[
            ("LISTING_URL", "https://example.com/list"),
            ("LISTING_LIMIT", "3"),
            ("POST_LIMIT", "500"),
            ("ISOLATE_SUBJECT_FAILURES", "true"),
            ("BROWSERLESS_TOKEN", "secret-token"),
        ]))
        .unwrap();
        assert_eq!(config.listing_url, "https://example.com/list");
        assert_eq!(config.listing_limit, 3);
        assert_eq!(config.post_limit, 100);
        assert!(config.isolate_subject_failures);
        assert_eq!(config.browserless_token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn invalid_numbers_are_config_errors() {
        let err = Config::from_lookup(lookup(&[("POST_LIMIT", "lots")])).unwrap_err();
        assert!(matches!(err, CelebSignalError::Config(ref m) if m.contains("POST_LIMIT")));

        let err = Config::from_lookup(lookup(&[("LISTING_LIMIT", "0")])).unwrap_err();
        assert!(matches!(err, CelebSignalError::Config(_)));
    }

    #[test]
    fn credentials_require_all_four_keys() {
        let ok = Credentials::parse(
            r#"{"consumer_key":"ck","consumer_secret":"cs","access_token":"at","access_token_secret":"ats"}"#,
        )
        .unwrap();
        assert_eq!(ok.access_token_secret, "ats");

        let err = Credentials::parse(r#"{"consumer_key":"ck","consumer_secret":"cs","access_token":"at"}"#)
            .unwrap_err();
        assert!(matches!(err, CelebSignalError::Config(ref m) if m.contains("access_token_secret")));

        let err = Credentials::parse("not json").unwrap_err();
        assert!(matches!(err, CelebSignalError::Config(ref m) if m.contains("malformed")));
    }

    #[test]
    fn missing_credentials_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Credentials::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CelebSignalError::Config(ref m) if m.contains("not found")));
    }

    #[test]
    fn debug_never_prints_secrets() {
        let creds = Credentials::parse(
            r#"{"consumer_key":"ck-1234567","consumer_secret":"very-secret","access_token":"at-1234567","access_token_secret":"also-secret"}"#,
        )
        .unwrap();
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(!rendered.contains("also-secret"));
    }
}
