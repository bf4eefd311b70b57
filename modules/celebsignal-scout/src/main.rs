use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use browserless_client::BrowserlessClient;
use celebsignal_common::{Config, Credentials};
use celebsignal_scout::extractor::{ListingExtractor, ListingSelectors};
use celebsignal_scout::pipeline::{PhaseRunner, RunOutcome, RunSettings, RunStats};
use celebsignal_scout::report;
use celebsignal_scout::scoring::LexiconScorer;
use celebsignal_store::SubjectStore;
use twitter_client::{OAuthCredentials, TwitterClient};

#[derive(Parser)]
#[command(name = "celebsignal")]
#[command(about = "Scrape a celebrity listing and classify Twitter sentiment per person")]
#[command(version)]
struct Cli {
    /// Listing page to scrape (overrides LISTING_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// SQLite file shared by the phases (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Directory for the JSON report (overrides RESULTS_DIR)
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Scrape, analyze and export (default)
    Run,
    /// Scrape the listing into the store only
    Scrape,
    /// Label stored subjects and export the report
    Analyze,
    /// Export the stored table as a report
    Export,
}

#[tokio::main]
async fn main() -> ExitCode {
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("celebsignal=info,twitter_client=info,browserless_client=info"));
    if json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Err(e) = run(Cli::parse()).await {
        error!("Twitter sentiment analysis failed: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<()> {
    info!("Twitter sentiment analysis starting...");

    let mut config = Config::from_env()?;
    if let Some(url) = cli.url {
        config.listing_url = url;
    }
    if let Some(database) = cli.database {
        config.database_path = database;
    }
    if let Some(results_dir) = cli.results_dir {
        config.results_dir = results_dir;
    }
    config.log_keys();

    // A missing or incomplete keys file stops every command before any work.
    let credentials = Credentials::load(&config.credentials_path)?;
    credentials.log_keys();
    let twitter = TwitterClient::new(OAuthCredentials {
        consumer_key: credentials.consumer_key,
        consumer_secret: credentials.consumer_secret,
        access_token: credentials.access_token,
        access_token_secret: credentials.access_token_secret,
    })?;

    let selectors = ListingSelectors::default();
    let browserless =
        BrowserlessClient::new(&config.browserless_url, config.browserless_token.as_deref())?
            .with_wait_for(&selectors.entry);
    let extractor = ListingExtractor::new(&selectors)?;
    let store = SubjectStore::open(&config.database_path).await?;
    let scorer = LexiconScorer::default();

    let runner = PhaseRunner::new(
        &store,
        &browserless,
        &twitter,
        &scorer,
        extractor,
        RunSettings::from(&config),
    );

    let mut stats = RunStats::default();
    let outcome = match cli.command.unwrap_or(Command::Run) {
        Command::Run => Some(runner.run().await?),
        Command::Scrape => {
            runner.scrape(&mut stats).await?;
            info!("Scrape complete. {stats}");
            None
        }
        Command::Analyze => {
            runner.analyze(&mut stats).await?;
            Some(runner.finish(stats).await?)
        }
        Command::Export => Some(runner.finish(stats).await?),
    };

    if let Some(RunOutcome {
        stats,
        records,
        report_path,
    }) = outcome
    {
        println!("{}", report::render_summary(&records));
        println!("Result JSON created: {}", report_path.display());
        info!("Run complete. {stats}");
    }

    store.close().await;
    Ok(())
}
