//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use vanity_core::config::Config;

use super::DictionaryArgs;
use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Load the dictionary and serve MCP requests until the client disconnects.
///
/// The dictionary is loaded before the transport opens, so a bad word list
/// fails the command instead of every tool call.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let words = args
        .dictionary
        .resolve(&config)
        .context("failed to load dictionary")?;
    info!(words = words.len(), "starting MCP server on stdio");

    let server = ProjectServer::new(words).with_max_fallback_draws(config.fallback_draws());
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server error")?;

    info!("MCP server stopped");
    Ok(())
}
