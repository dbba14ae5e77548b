//! Transport layer for the tool server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: JSON over HTTP with three endpoints - feature: `http`
//! - **CLI**: Interactive prompt over stdin/stdout - feature: `cli`
//!
//! Each transport handles its own input and output and delegates every
//! tool call to the [`ToolServer`](crate::core::ToolServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
