use clap::Parser;
use tracing_subscriber::EnvFilter;
use tweetmood_core::AppConfig;
use tweetmood_search::{SearchClient, SearchError};
use tweetmood_sentiment::{LexiconAnalyzer, OutputPaths, RunOutcome, Sentiment, SentimentSummary};

#[derive(Debug, Parser)]
#[command(name = "tweetmood")]
#[command(about = "Search recent posts, classify their sentiment, and append them to text files")]
struct Cli {
    /// Free-text search query
    #[arg(long, env = "TWEETMOOD_QUERY", default_value = "work")]
    query: String,

    /// Maximum number of posts to fetch
    #[arg(
        long,
        env = "TWEETMOOD_COUNT",
        default_value_t = 200,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = tweetmood_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    let count = usize::try_from(cli.count)?;

    // Search failures are logged and absorbed: whatever was collected is
    // still written and the process exits 0.
    let outcome = match authenticate(&config) {
        Ok(client) => tweetmood_sentiment::run(&client, &cli.query, count, &LexiconAnalyzer).await,
        Err(e) => RunOutcome {
            posts: Vec::new(),
            error: Some(e),
        },
    };

    match &outcome.error {
        Some(e) if e.is_authentication() => {
            tracing::error!(error = %e, "authentication failed");
        }
        Some(e) => {
            tracing::warn!(
                error = %e,
                collected = outcome.posts.len(),
                "search failed; keeping posts collected so far"
            );
        }
        None => {}
    }

    log_summary(&cli.query, &SentimentSummary::from_posts(&outcome.posts));

    let paths = OutputPaths {
        all: config.output_path.clone(),
        negative: config.negative_output_path.clone(),
    };
    tweetmood_sentiment::write_outputs(&paths, &outcome.posts).await?;

    Ok(())
}

/// Loads the API secrets and binds them to a search client.
///
/// Missing secrets are reported as an authentication failure.
fn authenticate(config: &AppConfig) -> Result<SearchClient, SearchError> {
    let credentials = tweetmood_core::load_credentials_from_env()
        .map_err(|e| SearchError::Authentication(e.to_string()))?;
    SearchClient::with_base_url(
        credentials,
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base_url,
    )
}

fn log_summary(query: &str, summary: &SentimentSummary) {
    tracing::info!(
        query,
        total = summary.total,
        positive_pct = %format!("{:.2}", summary.percentage(Sentiment::Positive)),
        neutral_pct = %format!("{:.2}", summary.percentage(Sentiment::Neutral)),
        negative_pct = %format!("{:.2}", summary.percentage(Sentiment::Negative)),
        "sentiment breakdown"
    );
}

#[cfg(test)]
mod tests;
