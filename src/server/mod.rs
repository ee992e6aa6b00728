//! HTTP server implementation for tinymux-rs.
//!
//! This module provides the transport side of the crate: the response type,
//! server configuration, and a simple async server loop that reads requests,
//! asks the routing table for a handler, and writes the handler's response.

mod config;
mod error;
mod http_server;
mod response;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
pub use response::{HttpResponse, StatusCode};
