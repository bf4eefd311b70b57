use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Overall sentiment assigned to a subject's batch of posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "POSITIVE")]
    Positive,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "NEGATIVE")]
    Negative,
    /// No posts were found, so nothing could be scored.
    #[serde(rename = "NA")]
    NotAvailable,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "POSITIVE",
            Label::Neutral => "NEUTRAL",
            Label::Negative => "NEGATIVE",
            Label::NotAvailable => "NA",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POSITIVE" => Ok(Label::Positive),
            "NEUTRAL" => Ok(Label::Neutral),
            "NEGATIVE" => Ok(Label::Negative),
            "NA" => Ok(Label::NotAvailable),
            other => Err(format!("unknown sentiment label: {other:?}")),
        }
    }
}

/// A person pulled from the listing page. `name` joins the scrape and analyze phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub name: String,
    pub photo_url: String,
    pub profession: String,
    pub best_work: String,
    /// `None` until the analyze phase writes a label.
    pub sentiment: Option<Label>,
}

impl SubjectRecord {
    /// Build a freshly scraped record. Double quotes are stripped from `best_work`.
    pub fn new(
        name: impl Into<String>,
        photo_url: impl Into<String>,
        profession: impl Into<String>,
        best_work: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.into(),
            photo_url: photo_url.into(),
            profession: profession.into(),
            best_work: best_work.as_ref().replace('"', ""),
            sentiment: None,
        }
    }
}
