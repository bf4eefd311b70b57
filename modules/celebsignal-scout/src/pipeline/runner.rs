//! Two-phase pipeline: SCRAPE writes the subject table, ANALYZE reads it back,
//! labels each subject, and the run finishes by exporting the table as JSON.
//!
//! The phases only communicate through [`SubjectStore`], so each can also be
//! run on its own (`scrape`, `analyze`, `export`).

use std::fmt;
use std::path::PathBuf;

use chrono::Local;
use tracing::{error, info, warn};

use celebsignal_common::{Config, Label, Result, SubjectRecord};
use celebsignal_store::SubjectStore;

use crate::aggregate::{aggregate, Aggregate};
use crate::extractor::ListingExtractor;
use crate::report;
use crate::scoring::PolarityScorer;
use crate::traits::{PageFetcher, PostSource};

use super::stats::RunStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Scrape,
    Analyze,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Scrape => "SCRAPE",
            Phase::Analyze => "ANALYZE",
            Phase::Done => "DONE",
        })
    }
}

/// Run parameters taken from [`Config`].
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub listing_url: String,
    pub listing_limit: usize,
    pub post_limit: u32,
    pub results_dir: PathBuf,
    pub isolate_subject_failures: bool,
}

impl From<&Config> for RunSettings {
    fn from(config: &Config) -> Self {
        Self {
            listing_url: config.listing_url.clone(),
            listing_limit: config.listing_limit,
            post_limit: config.post_limit,
            results_dir: config.results_dir.clone(),
            isolate_subject_failures: config.isolate_subject_failures,
        }
    }
}

/// What a finished run (or a finishing `analyze` / `export`) produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub stats: RunStats,
    pub records: Vec<SubjectRecord>,
    pub report_path: PathBuf,
}

pub struct PhaseRunner<'a> {
    store: &'a SubjectStore,
    pages: &'a dyn PageFetcher,
    posts: &'a dyn PostSource,
    scorer: &'a dyn PolarityScorer,
    extractor: ListingExtractor,
    settings: RunSettings,
}

impl<'a> PhaseRunner<'a> {
    pub fn new(
        store: &'a SubjectStore,
        pages: &'a dyn PageFetcher,
        posts: &'a dyn PostSource,
        scorer: &'a dyn PolarityScorer,
        extractor: ListingExtractor,
        settings: RunSettings,
    ) -> Self {
        Self {
            store,
            pages,
            posts,
            scorer,
            extractor,
            settings,
        }
    }

    /// SCRAPE → ANALYZE → DONE. The first error aborts the run; whatever the
    /// scrape phase stored stays on disk.
    pub async fn run(&self) -> Result<RunOutcome> {
        let mut stats = RunStats::default();

        self.scrape(&mut stats)
            .await
            .inspect_err(|e| log_failure(Phase::Scrape, e))?;
        self.analyze(&mut stats)
            .await
            .inspect_err(|e| log_failure(Phase::Analyze, e))?;
        self.finish(stats)
            .await
            .inspect_err(|e| log_failure(Phase::Done, e))
    }

    /// Fetch the listing, extract subjects, and replace the stored batch.
    pub async fn scrape(&self, stats: &mut RunStats) -> Result<usize> {
        info!(phase = %Phase::Scrape, url = %self.settings.listing_url, "Scraping listing");
        info!(
            born_on = %Local::now().format("%B %d"),
            "Getting data for celebrities born on this date"
        );

        let html = self.pages.rendered_html(&self.settings.listing_url).await?;
        let records = self.extractor.extract(&html, self.settings.listing_limit)?;
        self.store.replace_all(&records).await?;

        stats.subjects_extracted = records.len() as u32;
        info!(count = records.len(), "Listing scraped and stored");
        Ok(records.len())
    }

    /// Label every stored subject from its recent posts.
    pub async fn analyze(&self, stats: &mut RunStats) -> Result<()> {
        info!(phase = %Phase::Analyze, "Reading subjects from store");
        let names = self.store.list_names().await?;
        info!(count = names.len(), "Performing sentiment analysis");

        for name in &names {
            let label = match self.analyze_subject(name).await {
                Ok(result) => {
                    stats.posts_scored += result.counts.total();
                    info!(
                        name = %name,
                        label = %result.label,
                        positive = result.counts.positive,
                        neutral = result.counts.neutral,
                        negative = result.counts.negative,
                        "Subject analyzed"
                    );
                    result.label
                }
                Err(e) if self.settings.isolate_subject_failures => {
                    warn!(name = %name, error = %e, "Subject failed, recording NA");
                    stats.isolated_failures += 1;
                    Label::NotAvailable
                }
                Err(e) => return Err(e),
            };

            stats.subjects_analyzed += 1;
            stats.record_label(label);

            if !self.store.update_sentiment(name, label).await? {
                warn!(name = %name, "No stored subject matched; sentiment not recorded");
                stats.unmatched_updates += 1;
            }
        }

        info!("Sentiment data stored");
        Ok(())
    }

    async fn analyze_subject(&self, name: &str) -> Result<Aggregate> {
        let posts = self
            .posts
            .recent_posts(name, self.settings.post_limit)
            .await?;
        Ok(aggregate(&posts, self.scorer))
    }

    /// Export the stored table as a timestamped report.
    pub async fn finish(&self, stats: RunStats) -> Result<RunOutcome> {
        info!(phase = %Phase::Done, "Exporting report");
        let records = self.store.fetch_all().await?;
        let report_path = report::write_report(&records, &self.settings.results_dir, &Local::now())?;

        Ok(RunOutcome {
            stats,
            records,
            report_path,
        })
    }
}

fn log_failure(phase: Phase, err: &celebsignal_common::CelebSignalError) {
    error!(phase = %phase, kind = err.kind(), error = %err, "Pipeline FAILED");
}
