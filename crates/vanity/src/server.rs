//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes vanity number generation over the MCP protocol, making
//! it available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library that
//! the CLI commands use, and each `#[tool]` method delegates to
//! [`VanityGenerator`] rather than implementing business logic directly.
//!
//! The dictionary is resolved once at startup and borrowed for the life of the
//! process. Each tool call builds its own generator, so calls never share
//! random state.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use vanity_core::fallback::DEFAULT_MAX_DRAWS;
use vanity_core::{Dictionary, VanityGenerator, VanityRequest};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `generate_vanity` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GenerateVanityParams {
    /// The caller's phone number (10-15 digits, optional leading '+').
    pub phone_number: String,
    /// The number to convert into vanity words.
    pub target_number: String,
}

/// MCP server exposing vanity generation to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    dictionary: &'static Dictionary,
    max_fallback_draws: usize,
}

impl ProjectServer {
    /// Create a new MCP server instance over a loaded dictionary.
    pub fn new(dictionary: &'static Dictionary) -> Self {
        Self {
            tool_router: Self::tool_router(),
            dictionary,
            max_fallback_draws: DEFAULT_MAX_DRAWS,
        }
    }

    /// Cap the random fallback draws per call.
    #[must_use]
    pub const fn with_max_fallback_draws(mut self, max_draws: usize) -> Self {
        self.max_fallback_draws = max_draws;
        self
    }
}

#[tool_router]
impl ProjectServer {
    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "dictionary_words": self.dictionary.len(),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}\nDictionary: {} words",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                self.dictionary.len(),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Generate the five best vanity numbers for a phone number.
    #[tool(
        description = "Convert the last 7 digits of a phone number into keypad letters, preferring dictionary words. Returns a JSON record with the five best vanity numbers, or an error classification and message."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", target = %params.target_number))]
    fn generate_vanity(
        &self,
        Parameters(params): Parameters<GenerateVanityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "generate_vanity", "executing MCP tool");

        let request = VanityRequest {
            phone_number: params.phone_number,
            target_number: params.target_number,
        };
        let record = VanityGenerator::new(self.dictionary)
            .with_max_fallback_draws(self.max_fallback_draws)
            .respond(&request);

        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "generate_vanity",
            success = record.is_success(),
            "MCP tool completed"
        );
        if record.is_success() {
            Ok(CallToolResult::success(vec![Content::text(json)]))
        } else {
            Ok(CallToolResult::error(vec![Content::text(json)]))
        }
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use generate_vanity to turn a phone number into ranked vanity words.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
