//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// HTTP transport with JSON request and response bodies.
    #[cfg(feature = "http")]
    Http(HttpConfig),

    /// Interactive prompt over stdin/stdout.
    #[cfg(feature = "cli")]
    Cli,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "cli"))]
        {
            return Self::Cli;
        }

        #[cfg(not(any(feature = "http", feature = "cli")))]
        {
            compile_error!("At least one transport feature must be enabled: http or cli");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Load HTTP settings from `TOOLS_HTTP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("TOOLS_HTTP_HOST") {
            config.host = host;
        }

        if let Ok(port) = std::env::var("TOOLS_HTTP_PORT") {
            config.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid TOOLS_HTTP_PORT: '{port}'")))?;
        }

        if let Ok(cors) = std::env::var("TOOLS_HTTP_CORS") {
            config.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        Ok(config)
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TransportConfig {
    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Create an interactive prompt transport config.
    #[cfg(feature = "cli")]
    pub fn cli() -> Self {
        Self::Cli
    }

    /// Load transport config from environment variables.
    ///
    /// `TOOLS_TRANSPORT` selects the transport; an empty or missing value
    /// picks the default.
    pub fn from_env() -> Result<Self> {
        let transport = std::env::var("TOOLS_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "http")]
            "" | "http" => Ok(Self::Http(HttpConfig::from_env()?)),
            #[cfg(all(not(feature = "http"), feature = "cli"))]
            "" => Ok(Self::Cli),
            #[cfg(feature = "cli")]
            "cli" => Ok(Self::Cli),
            other => Err(Error::config(format!("Unsupported transport: '{other}'"))),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}", cfg.address()),
            #[cfg(feature = "cli")]
            Self::Cli => "interactive prompt (stdin/stdout)".to_string(),
        }
    }

    /// Check if this transport is the interactive prompt.
    pub fn is_cli(&self) -> bool {
        #[cfg(feature = "cli")]
        {
            matches!(self, Self::Cli)
        }
        #[cfg(not(feature = "cli"))]
        {
            false
        }
    }
}
