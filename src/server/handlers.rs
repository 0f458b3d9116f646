//! MCP tool handlers for the article search server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::tools::{SearchResponse, SearchTools};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;

/// The MCP server that exposes article search tools.
#[derive(Clone)]
pub struct ArticleSearchServer {
    search_tools: SearchTools,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ArticleSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "article-search-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Keyword search over a fixed article corpus. Results are ranked by match count and returned as HTML-safe text with matches wrapped in <mark> tags.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchArticlesParams {
    /// Free-text query; whitespace separates tokens. Empty lists everything.
    #[serde(default)]
    query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct HighlightTextParams {
    /// Text to escape and highlight
    text: String,
    /// Query whose tokens are highlighted
    #[serde(default)]
    query: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

fn search_json(response: &SearchResponse) -> Result<Value, serde_json::Error> {
    serde_json::to_value(response)
}

fn highlight_json(text: &str, query: &str, tools: &SearchTools) -> Value {
    let annotated = tools.highlight(text, query);
    json!({
        "query": query,
        "mark_count": annotated.mark_count(),
        "html": annotated,
    })
}

fn articles_json(tools: &SearchTools) -> Value {
    let corpus = tools.corpus();
    json!({
        "total": corpus.len(),
        "articles": corpus.articles(),
    })
}

fn stats_json(tools: &SearchTools) -> Value {
    json!({
        "metrics": tools.metrics().snapshot(),
        "corpus_version": tools.corpus().version(),
        "cache_ttl_secs": tools.cache_ttl_secs(),
    })
}

#[tool_router]
impl ArticleSearchServer {
    /// Create a new server over the given search tools.
    pub fn new(search_tools: SearchTools) -> Self {
        Self {
            search_tools,
            tool_router: Self::tool_router(),
        }
    }

    pub fn search_tools(&self) -> &SearchTools {
        &self.search_tools
    }

    /// Search articles by keyword.
    #[tool(
        description = "Search article titles and bodies by keyword. Tokens are matched case-insensitively as literal substrings; results are ranked by match count and returned with <mark>-highlighted, HTML-escaped title and body."
    )]
    async fn search_articles(
        &self,
        params: Parameters<SearchArticlesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: search_articles called");
        tracing::debug!("Parameters: query={:?}", params.query);

        let response = self.search_tools.search(&params.query);
        let value = search_json(&response).map_err(to_mcp_error)?;

        json_result(&value)
    }

    /// Highlight query tokens in arbitrary text.
    #[tool(
        description = "HTML-escape a piece of text and wrap every occurrence of the query's tokens in <mark> tags."
    )]
    async fn highlight_text(
        &self,
        params: Parameters<HighlightTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: highlight_text called");
        tracing::debug!(
            "Parameters: text_len={}, query={:?}",
            params.text.len(),
            params.query
        );

        json_result(&highlight_json(
            &params.text,
            &params.query,
            &self.search_tools,
        ))
    }

    /// List every article in the corpus.
    #[tool(description = "List all articles in the corpus with their id, title and body")]
    async fn list_articles(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: list_articles called");
        json_result(&articles_json(&self.search_tools))
    }

    /// Report search metrics.
    #[tool(description = "Report search and cache metrics for this server")]
    async fn search_stats(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: search_stats called");
        json_result(&stats_json(&self.search_tools))
    }
}
