//! Streamable HTTP listener for the MCP server.
//!
//! The rmcp streamable HTTP service is mounted at [`MCP_PATH`]; every other
//! path answers `404 Not Found`. Each accepted connection runs on its own task.

use crate::mcp::ConfirmServer;
use bytes::Bytes;
use http_body_util::{combinators::BoxBody, BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::{service_fn, Service};
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Path the MCP endpoint is served on.
pub const MCP_PATH: &str = "/mcp";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3142;

type HttpBody = BoxBody<Bytes, Infallible>;
type McpService = TowerToHyperService<StreamableHttpService<ConfirmServer, LocalSessionManager>>;

fn mcp_service() -> McpService {
    TowerToHyperService::new(StreamableHttpService::new(
        || Ok(ConfirmServer::new()),
        Arc::new(LocalSessionManager::default()),
        Default::default(),
    ))
}

async fn route(mcp: McpService, req: Request<Incoming>) -> Result<Response<HttpBody>, Infallible> {
    if req.uri().path() != MCP_PATH {
        tracing::debug!(path = %req.uri().path(), "no route");
        return Ok(not_found());
    }
    mcp.call(req).await
}

fn not_found() -> Response<HttpBody> {
    let mut response = Response::new(Full::new(Bytes::from_static(b"Not Found")).boxed());
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

/// Accept connections on `listener` until `shutdown` resolves.
///
/// Accept failures are logged and skipped; they do not stop the listener.
pub async fn serve(listener: TcpListener, shutdown: impl Future<Output = ()>) -> io::Result<()> {
    let mcp = mcp_service();
    tokio::pin!(shutdown);

    loop {
        let accepted = tokio::select! {
            _ = &mut shutdown => break,
            accepted = listener.accept() => accepted,
        };
        let (stream, peer) = match accepted {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "failed to accept connection");
                continue;
            }
        };

        let mcp = mcp.clone();
        tokio::spawn(async move {
            let service = service_fn(move |req| route(mcp.clone(), req));
            if let Err(e) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                tracing::debug!(%peer, error = %e, "connection ended with error");
            }
        });
    }

    tracing::info!("listener stopped");
    Ok(())
}

/// Resolves on Ctrl-C. If the signal handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
