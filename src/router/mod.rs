//! Request routing for tinymux-rs.
//!
//! This module provides the routing table that maps a canonical request path
//! and HTTP method to a registered handler, plus the path normalization it
//! relies on.

mod handler;
mod path;
mod route;
mod table;
mod tests;

// Re-export public items
pub use handler::{not_found_handler, Endpoints, HandlerFn, HandlerFuture};
pub use path::normalize_path;
pub use route::Route;
pub use table::Router;
