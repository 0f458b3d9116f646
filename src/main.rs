//! Article search server - main entry point.
//!
//! Serves keyword search with HTML-safe highlighting over a Model Context
//! Protocol (MCP) stdio transport.

use anyhow::Result;
use article_search_mcp::server::{self, ArticleSearchServer};
use article_search_mcp::{Config, Corpus, SearchTools};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr only; stdout carries MCP traffic
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let corpus = match &config.corpus_path {
        Some(path) => Corpus::load(path).inspect_err(|e| {
            error!("Failed to load corpus: {}", e);
        })?,
        None => {
            info!("No ARTICLE_CORPUS_PATH set, using the sample corpus");
            Corpus::sample()
        }
    };

    info!(
        articles = corpus.len(),
        cache_ttl_secs = config.cache_ttl_secs,
        "Article search server initialized"
    );

    let server = ArticleSearchServer::new(SearchTools::new(corpus, config.cache_ttl_secs));

    info!("Starting MCP server with stdio transport");
    server::run_server(server).await?;

    info!("Article search server shutdown complete");
    Ok(())
}
