//! MCP server implementation

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_handler, tool_router, ServerHandler, ServiceExt};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use crate::openapi;
use crate::upload::Uploader;

/// MCP server for docfox
#[derive(Clone)]
pub struct DocfoxServer {
    pub uploader: Arc<Uploader>,
    tool_router: ToolRouter<Self>,
}

// Tool parameter types

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UploadOpenapiParams {
    /// Apifox project ID (required)
    pub project_id: String,
    /// Apifox access token (required)
    pub access_token: String,
    /// Complete OpenAPI/Swagger JSON document as a string (required)
    pub openapi_json: String,
}

// Server implementation

#[tool_router]
impl DocfoxServer {
    pub fn new(uploader: Arc<Uploader>) -> Self {
        Self {
            uploader,
            tool_router: Self::tool_router(),
        }
    }

    /// Serve the bundled example specification
    #[tool(
        description = "Get an example OpenAPI/Swagger specification (based on Petstore) with usage guidance. Use it to learn the expected document structure, then author your own document and upload it with upload_openapi."
    )]
    async fn get_openapi_specification(&self) -> String {
        tracing::info!("get_openapi_specification tool called");
        openapi::example_specification()
    }

    /// Upload a caller-supplied OpenAPI document to Apifox
    #[tool(
        description = "Upload an OpenAPI/Swagger JSON document to the Apifox platform. Parameters: project_id (Apifox project ID, required), access_token (Apifox access token, required), openapi_json (complete OpenAPI JSON string, required). Consider calling get_openapi_specification first to see the expected format."
    )]
    async fn upload_openapi(&self, Parameters(params): Parameters<UploadOpenapiParams>) -> String {
        tracing::info!(
            project_id = %params.project_id,
            document_len = params.openapi_json.len(),
            "upload_openapi tool called"
        );
        self.uploader
            .upload(&params.project_id, &params.access_token, &params.openapi_json)
            .await
    }
}

#[tool_handler]
impl ServerHandler for DocfoxServer {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::default(),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: rmcp::model::Implementation {
                name: "docfox".into(),
                title: Some("Docfox OpenAPI Uploader".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some("Docfox uploads OpenAPI documents to the Apifox documentation platform. Call get_openapi_specification to see a canonical document, then upload_openapi with your project ID, access token and document.".into()),
        }
    }
}

/// Run the MCP server on stdio
pub async fn serve_stdio(server: DocfoxServer) -> anyhow::Result<()> {
    tracing::info!("Starting MCP server on stdio...");
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}

/// Run the MCP server on HTTP
pub async fn serve_http(server: DocfoxServer, port: u16) -> anyhow::Result<()> {
    use axum::routing::get;
    use axum::Router;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService, StreamableHttpServerConfig,
    };
    use tokio_util::sync::CancellationToken;
    use tower_http::trace::TraceLayer;

    let uploader = server.uploader.clone();

    let ct = CancellationToken::new();

    let config = StreamableHttpServerConfig {
        cancellation_token: ct.clone(),
        ..Default::default()
    };

    let mcp_service = StreamableHttpService::new(
        move || Ok(DocfoxServer::new(uploader.clone())),
        Arc::new(LocalSessionManager::default()),
        config,
    );

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Docfox MCP server running at http://{}/mcp", addr);
    tracing::info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down...");
            ct.cancel();
        })
        .await?;

    Ok(())
}
