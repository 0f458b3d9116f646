//! MCP server for article search.
//!
//! Exposes search and highlighting to AI assistants through the Model
//! Context Protocol.

pub mod handlers;

pub use handlers::ArticleSearchServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server with stdio transport until the client disconnects.
pub async fn run_server(server: ArticleSearchServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
