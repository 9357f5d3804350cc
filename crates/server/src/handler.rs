//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::ogp_parse::{OgpParseParams, parse_impl};

use ogp_client::OgpParser;
use ogp_core::ParserOptions;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for ogp-parser.
#[derive(Clone)]
pub struct OgpServer {
    tool_router: ToolRouter<Self>,
    parser: OgpParser,
    defaults: ParserOptions,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl OgpServer {
    /// Create a new server handler.
    ///
    /// `defaults` apply to calls that do not pass their own allow list.
    pub fn new(parser: OgpParser, defaults: ParserOptions) -> Self {
        Self { tool_router: Self::tool_router(), parser, defaults }
    }

    /// Fetch a page and extract its link-preview metadata.
    #[tool(
        description = "Fetch a URL and extract its title, description, favicon, Open Graph and Twitter Card metadata. Missing fields are null."
    )]
    async fn ogp_parse(&self, params: Parameters<OgpParseParams>) -> Result<CallToolResult, McpError> {
        parse_impl(&self.parser, &self.defaults, params.0).await
    }
}

impl ServerHandler for OgpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "ogp-parser".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
