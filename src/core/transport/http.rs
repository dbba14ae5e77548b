//! HTTP transport implementation.
//!
//! JSON over HTTP with three endpoints:
//!
//! - `GET /` - health check and tool names
//! - `GET /tools` - every tool with its description and parameters
//! - `POST /call_tool` - invoke a tool by name
//!
//! Tool failures and malformed request bodies both answer `400` with an
//! `{"error", "status": "error"}` body.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use http::StatusCode;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::{HealthReport, ToolListing, ToolServer};
use crate::domains::tools::{InvocationRequest, ToolCallResponse};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the router for the given server.
    pub fn router(&self, server: ToolServer) -> Router {
        router(server, self.config.enable_cors)
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: ToolServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on http://{} (CORS {})", addr, cors_status);
        info!("  → Health:    GET  /");
        info!("  → Tools:     GET  /tools");
        info!("  → Call tool: POST /call_tool");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::serve(e.to_string()))?;

        info!("HTTP transport finished");
        Ok(())
    }
}

/// Build the application router.
pub fn router(server: ToolServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(health_check))
        .route("/tools", get(list_tools))
        .route("/call_tool", post(call_tool))
        .with_state(server)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::new()),
        );

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Health check endpoint.
async fn health_check(State(server): State<ToolServer>) -> Json<HealthReport> {
    Json(server.health())
}

/// Tool listing endpoint.
async fn list_tools(State(server): State<ToolServer>) -> Json<ToolListing> {
    Json(server.list_tools())
}

/// Tool invocation endpoint.
#[instrument(skip_all)]
async fn call_tool(
    State(server): State<ToolServer>,
    payload: Result<Json<InvocationRequest>, JsonRejection>,
) -> (StatusCode, Json<ToolCallResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected tool call body: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ToolCallResponse::message(rejection.body_text())),
            );
        }
    };

    let response = server.call_tool(request).into_response();
    let status = if response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
