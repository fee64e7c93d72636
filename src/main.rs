//! Docfox - MCP server that generates OpenAPI documents and uploads them to Apifox

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docfox::apifox::ApifoxClient;
use docfox::config::Config;
use docfox::mcp::DocfoxServer;
use docfox::openapi::{self, ApiInfo, ServerInfo};
use docfox::upload::Uploader;

#[derive(Parser)]
#[command(name = "docfox")]
#[command(about = "MCP server that generates OpenAPI documents and uploads them to Apifox")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the MCP server (stdio mode for Claude Desktop)
    Mcp,

    /// Start the MCP server (HTTP mode)
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the bundled example specification
    Example,

    /// Generate a minimal OpenAPI document
    Generate {
        /// API title
        #[arg(long)]
        title: Option<String>,

        /// API version
        #[arg(long)]
        version: Option<String>,

        /// API description
        #[arg(long)]
        description: Option<String>,

        /// Server URL (repeatable)
        #[arg(long = "server")]
        servers: Vec<String>,
    },

    /// Upload an OpenAPI document from a file
    Upload {
        /// Path to the OpenAPI JSON file
        file: PathBuf,

        /// Apifox project ID (falls back to config)
        #[arg(long)]
        project_id: Option<String>,

        /// Apifox access token (falls back to config)
        #[arg(long)]
        access_token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Logs go to stderr so the stdio MCP transport stays
    // clean.
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("docfox={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load_from(path)?
    } else {
        Config::load()?
    };

    match cli.command {
        Commands::Mcp => {
            tracing::info!("Starting MCP server (stdio mode)");

            let server = build_server(&config);
            docfox::mcp::server::serve_stdio(server).await?;
        }

        Commands::Serve { port } => {
            let port = port.unwrap_or(config.http_port);
            tracing::info!("Starting MCP server (HTTP mode) on port {}", port);

            let server = build_server(&config);

            println!("Docfox MCP server running at http://localhost:{}/mcp", port);

            docfox::mcp::server::serve_http(server, port).await?;
        }

        Commands::Example => {
            println!("{}", openapi::example_specification());
        }

        Commands::Generate {
            title,
            version,
            description,
            servers,
        } => {
            let mut api_info = ApiInfo::default();
            if let Some(title) = title {
                api_info.title = title;
            }
            if let Some(version) = version {
                api_info.version = version;
            }
            if let Some(description) = description {
                api_info.description = description;
            }
            api_info.servers = servers
                .into_iter()
                .map(|url| ServerInfo {
                    url,
                    description: String::new(),
                })
                .collect();

            println!("{}", openapi::generate_document(api_info)?);
        }

        Commands::Upload {
            file,
            project_id,
            access_token,
        } => {
            let document = std::fs::read_to_string(&file)?;

            // Flags win over config defaults
            let project_id = project_id
                .or_else(|| config.project_id.clone())
                .unwrap_or_default();
            let access_token = access_token
                .or_else(|| config.access_token.clone())
                .unwrap_or_default();

            let uploader = Uploader::new(ApifoxClient::new(&config));
            let result = uploader.upload(&project_id, &access_token, &document).await;

            println!("{}", result);
        }
    }

    Ok(())
}

fn build_server(config: &Config) -> DocfoxServer {
    let uploader = Arc::new(Uploader::new(ApifoxClient::new(config)));
    DocfoxServer::new(uploader)
}
