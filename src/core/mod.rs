//! Core module containing shared infrastructure components.
//!
//! This module provides error handling, configuration, the tool server
//! itself, and the transport layer.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{HealthReport, ToolListing, ToolServer};
pub use transport::{TransportConfig, TransportService};
