use anyhow::Context;
use clap::Parser;
use elicit_core::http::{self, DEFAULT_HOST, DEFAULT_PORT, MCP_PATH};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// MCP server demonstrating elicitation.
///
/// Serves one tool, `customer_delete`, over streamable HTTP. Each call asks
/// the client to confirm through an elicitation request with an empty message
/// and a single required boolean `confirm` field.
#[derive(Parser)]
#[command(name = "elicit-mcp", version, about = "MCP elicitation example server")]
struct Args {
    /// Host to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("elicit_mcp=info".parse()?)
                .add_directive("elicit_core=info".parse()?),
        )
        .init();

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("MCP server listening on http://{addr}{MCP_PATH}");
    http::serve(listener, http::shutdown_signal()).await?;

    Ok(())
}
