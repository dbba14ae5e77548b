//! Tool Server Entry Point
//!
//! Initializes logging, loads configuration, builds the tool registry, and
//! starts the server with the configured transport.
//!
//! Usage:
//!   text-tools-server            # HTTP server (default)
//!   text-tools-server --cli      # Interactive prompt

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use text_tools_server::core::{Config, ToolServer, TransportService};
use text_tools_server::domains::tools::ToolRegistry;

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run());

    // A pending stdin read sits on the blocking pool and never returns by itself
    runtime.shutdown_timeout(Duration::from_millis(100));

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("text-tools-server {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration from environment
    let mut config = Config::from_env().context("failed to load configuration")?;

    if let Some(unknown) = args.iter().find(|a| a.as_str() != "--cli") {
        bail!("unknown argument: {unknown} (try --help)");
    }

    if args.iter().any(|a| a == "--cli") {
        #[cfg(feature = "cli")]
        {
            config.transport = text_tools_server::core::TransportConfig::cli();
        }
        #[cfg(not(feature = "cli"))]
        bail!("--cli requires the `cli` feature");
    }

    // Initialize logging
    init_logging(&config.logging.level);

    debug!("Loaded configuration: {:?}", config);

    let transport = TransportService::new(config.transport.clone());
    let server = ToolServer::new(config, ToolRegistry::builtin());

    info!("Starting {} v{}", server.name(), server.version());

    info!(
        "Server initialized with {} tools: {}",
        server.registry().len(),
        server.registry().tool_names().join(", ")
    );

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the interactive prompt keeps stdout to itself.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        r#"text-tools-server - text-analysis tools over HTTP or an interactive prompt

USAGE:
    text-tools-server [--cli]

OPTIONS:
    --cli           Run the interactive prompt instead of the HTTP server
    -h, --help      Show this help
    -V, --version   Show version

ENDPOINTS (HTTP mode):
    GET  /            Health check and tool names
    GET  /tools       List all tools
    POST /call_tool   Call a tool: {{"tool_name": ..., "arguments": {{"text": ...}}}}

ENVIRONMENT:
    TOOLS_SERVER_NAME   Server name reported by the health check
    TOOLS_LOG_LEVEL     trace, debug, info, warn, error (default: info)
    TOOLS_TRANSPORT     http or cli (default: http)
    TOOLS_HTTP_HOST     Bind host (default: 127.0.0.1)
    TOOLS_HTTP_PORT     Bind port (default: 5000)
    TOOLS_HTTP_CORS     Set to false to disable CORS
    RUST_LOG            Additional tracing filter directives"#
    );
}
