//! Delayed-response HTTP server.
//!
//! # Responsibilities
//! - Bind a listener, ephemeral port if none is configured
//! - Serve a single wildcard endpoint with an optional injected delay
//! - Accept connections concurrently, one task per connection
//! - Hand a ServerHandle to the caller for lifecycle control

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper::server::conn::http1;
use hyper_util::{rt::TokioIo, service::TowerToHyperService};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_server_config, ValidationError};
use crate::lifecycle::Shutdown;
use crate::server::handle::ServerHandle;

/// Error type for server lifecycle operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to acquire the listening socket.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Config rejected by semantic validation.
    #[error("invalid server config: {0:?}")]
    Invalid(Vec<ValidationError>),

    /// Bound address could not be turned into a base URL.
    #[error("failed to form base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Handler state: the immutable config the response is built from.
#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

/// An HTTP server whose response latency is controlled by config.
pub struct DelayedResponseServer;

impl DelayedResponseServer {
    /// Bind `config.bind_address()` and begin serving.
    ///
    /// Returns once the socket is listening; a connect issued
    /// immediately after this returns lands in the accept backlog and
    /// is not refused. Fails with [`ServerError::Bind`] if the socket
    /// cannot be acquired.
    pub async fn start(config: ServerConfig) -> Result<ServerHandle, ServerError> {
        validate_server_config(&config).map_err(ServerError::Invalid)?;

        let addr = config.bind_address();
        let listener = TcpListener::bind(&addr).await.map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;
        let base_url = Url::parse(&format!("http://{}:{}/", config.bind_host, local_addr.port()))?;

        tracing::info!(
            address = %local_addr,
            delay_ms = config.delay_ms,
            status_code = config.status_code,
            "delayed-response server bound"
        );

        let state = AppState {
            config: Arc::new(config),
        };
        let router = Self::build_router(state);

        let shutdown = Shutdown::new();
        let task_shutdown = shutdown.clone();
        let task = tokio::spawn(serve_loop(listener, router, task_shutdown));

        Ok(ServerHandle::new(local_addr, base_url, shutdown, task))
    }

    /// Build the router: one logical endpoint matching every path.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(respond))
            .route("/{*path}", any(respond))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }
}

/// Accept loop. Each connection is served on its own task so a handler
/// suspended in its delay never blocks other connections. On shutdown
/// the loop exits, the listener is dropped (releasing the port), and
/// remaining connection tasks are aborted at their await point.
async fn serve_loop(listener: TcpListener, router: Router, shutdown: Shutdown) {
    let mut shutdown_rx = shutdown.subscribe();
    let mut connections = JoinSet::new();

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        tracing::debug!(peer_addr = %peer, "connection accepted");
                        let service = TowerToHyperService::new(router.clone());
                        let mut conn_shutdown = shutdown.subscribe();
                        connections.spawn(async move {
                            let conn = http1::Builder::new()
                                .serve_connection(TokioIo::new(stream), service);
                            tokio::pin!(conn);
                            tokio::select! {
                                result = conn.as_mut() => {
                                    if let Err(e) = result {
                                        tracing::debug!(peer_addr = %peer, error = %e, "connection ended with error");
                                    }
                                }
                                _ = conn_shutdown.recv() => {
                                    tracing::debug!(peer_addr = %peer, "connection dropped on shutdown");
                                }
                            }
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "accept failed");
                    }
                }
            }
            _ = shutdown_rx.recv() => {
                tracing::info!("shutdown signal received, closing listener");
                break;
            }
        }
    }

    drop(listener);
    connections.shutdown().await;
    tracing::debug!("serve loop exited");
}

/// The single endpoint handler. Suspends for the configured delay, then
/// writes the configured status and content type with an empty body.
async fn respond(State(state): State<AppState>, request: Request<Body>) -> Response {
    let config = &state.config;

    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        delay_ms = config.delay_ms,
        "request received"
    );

    if config.delay_ms > 0 {
        // Non-busy suspension scoped to this connection's task. If the
        // server stops mid-sleep the task is cancelled right here and
        // no partial response is written.
        tokio::time::sleep(config.delay()).await;
        tracing::debug!(delay_ms = config.delay_ms, "delay elapsed, writing response");
    }

    let status = StatusCode::from_u16(config.status_code).unwrap_or(StatusCode::OK);
    match Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, config.content_type.as_str())
        .body(Body::empty())
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "failed to build response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
