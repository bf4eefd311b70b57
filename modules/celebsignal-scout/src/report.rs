use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use celebsignal_common::{CelebSignalError, Result, SubjectRecord};

pub const REPORT_PREFIX: &str = "Sentiment-Analysis-Result";

/// One element of the exported JSON array. Key spelling is part of the report format.
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    pub name: &'a str,
    #[serde(rename = "Photo")]
    pub photo: &'a str,
    #[serde(rename = "Profession")]
    pub profession: &'a str,
    #[serde(rename = "Best Work")]
    pub best_work: &'a str,
    #[serde(rename = "Twitter Sentiment")]
    pub sentiment: &'a str,
}

impl<'a> From<&'a SubjectRecord> for ReportEntry<'a> {
    fn from(record: &'a SubjectRecord) -> Self {
        Self {
            name: &record.name,
            photo: &record.photo_url,
            profession: &record.profession,
            best_work: &record.best_work,
            sentiment: record.sentiment.map(|l| l.as_str()).unwrap_or(""),
        }
    }
}

pub fn report_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{REPORT_PREFIX}_{}.json", at.format("%Y-%m-%d_%H-%M-%S"))
}

pub fn render_json(records: &[SubjectRecord]) -> Result<String> {
    let entries: Vec<ReportEntry<'_>> = records.iter().map(ReportEntry::from).collect();
    serde_json::to_string_pretty(&entries)
        .map_err(|e| CelebSignalError::Export(format!("could not serialize report: {e}")))
}

/// Write the report into `dir` (created if missing) and return its path.
pub fn write_report<Tz>(records: &[SubjectRecord], dir: &Path, at: &DateTime<Tz>) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let json = render_json(records)?;

    std::fs::create_dir_all(dir).map_err(|e| {
        CelebSignalError::Export(format!(
            "could not create results directory {}: {e}",
            dir.display()
        ))
    })?;

    let path = dir.join(report_file_name(at));
    std::fs::write(&path, json)
        .map_err(|e| CelebSignalError::Export(format!("could not write {}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), entries = records.len(), "Report written");
    Ok(path)
}

/// Human-readable per-subject listing for the console.
pub fn render_summary(records: &[SubjectRecord]) -> String {
    let mut out = String::new();
    let title = "The Twitter Sentiment Result:";
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
    for record in records {
        let _ = writeln!(out, "Name: {}", record.name);
        let _ = writeln!(out, "Photo: {}", record.photo_url);
        let _ = writeln!(out, "Profession: {}", record.profession);
        let _ = writeln!(out, "Best Work: {}", record.best_work);
        let _ = writeln!(
            out,
            "Overall Twitter Sentiment: {}\n",
            record.sentiment.map(|l| l.as_str()).unwrap_or("")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use celebsignal_common::Label;
    use chrono::Utc;

    fn record(name: &str, sentiment: Option<Label>) -> SubjectRecord {
        SubjectRecord {
            sentiment,
            ..SubjectRecord::new(name, "https://img/x.jpg", "Actor", "Film")
        }
    }

    #[test]
    fn file_name_carries_the_timestamp() {
        let at = Utc.with_ymd_and_hms(2017, 6, 5, 9, 3, 7).unwrap();
        assert_eq!(
            report_file_name(&at),
            "Sentiment-Analysis-Result_2017-06-05_09-03-07.json"
        );
    }

    #[test]
    fn json_uses_report_keys_and_empty_string_for_unset_sentiment() {
        let json = render_json(&[
            record("A", Some(Label::Positive)),
            record("B", None),
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["name"], "A");
        assert_eq!(first["Photo"], "https://img/x.jpg");
        assert_eq!(first["Profession"], "Actor");
        assert_eq!(first["Best Work"], "Film");
        assert_eq!(first["Twitter Sentiment"], "POSITIVE");
        assert_eq!(value[1]["Twitter Sentiment"], "");
        assert!(json.contains("\n  {\n    \"name\""));
    }

    #[test]
    fn write_report_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let results = dir.path().join("results");
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let path = write_report(&[record("A", Some(Label::NotAvailable))], &results, &at).unwrap();

        assert_eq!(path.parent().unwrap(), results.as_path());
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["Twitter Sentiment"], "NA");
    }

    #[test]
    fn summary_lists_every_subject() {
        let text = render_summary(&[record("A", Some(Label::Negative)), record("B", None)]);
        assert!(text.contains("Name: A"));
        assert!(text.contains("Overall Twitter Sentiment: NEGATIVE"));
        assert!(text.contains("Name: B"));
    }
}
