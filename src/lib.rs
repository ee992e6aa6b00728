//! A minimal HTTP request multiplexer library.
//!
//! This library maps an incoming request's normalized path and HTTP method to
//! a previously registered handler, with a focus on simplicity, correctness,
//! and performance. A small parser and async server are included so the
//! router can be served over TCP out of the box.
//!
//! # Features
//!
//! - A routing table keyed on canonical paths with per-method handler slots
//! - Path normalization applied identically on registration and dispatch, so
//!   `/hello`, `/hello/` and space-padded variants address the same route
//! - Per-method registration sugar (GET, POST, PUT, PATCH, DELETE, OPTIONS,
//!   HEAD) and bulk registration of several methods at once
//! - Misses are never errors: dispatch falls back to a not-found handler
//!   that renders a plain 404
//! - Parse HTTP requests from byte slices, with JSON request and response
//!   body support
//! - Simple async HTTP server with connection limiting and graceful shutdown
//!
//! # Examples
//!
//! ## Routing
//!
//! ```
//! use tinymux_rs::{HttpResponse, Method, Router, StatusCode};
//!
//! let mut router = Router::new();
//! router.get("/hello", |_req| async {
//!     Ok(HttpResponse::new(StatusCode::Ok)
//!         .with_content_type("text/plain")
//!         .with_body_string("Hello, World!"))
//! });
//!
//! // Dispatch is total: both spellings reach the handler above, and a miss
//! // would yield the not-found handler instead of an error.
//! let handler = router.dispatch("/hello/", Method::GET);
//! let _ = router.dispatch("/hello", Method::GET);
//! # let _ = handler;
//! ```
//!
//! ## Parsing a request
//!
//! ```
//! use tinymux_rs::parse_request;
//!
//! let request_bytes = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! match parse_request(request_bytes) {
//!     Ok(request) => {
//!         println!("Method: {}", request.method);
//!         println!("Path: {}", request.path);
//!     },
//!     Err(err) => {
//!         println!("Error parsing request: {err}");
//!     }
//! }
//! ```
//!
//! ## Serving
//!
//! ```no_run
//! use tinymux_rs::{HttpResponse, HttpServer, Router, ServerConfig, StatusCode};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/", |_req| async {
//!     Ok(HttpResponse::new(StatusCode::Ok).with_body_string("Hello, World!"))
//! });
//!
//! // Wrapping the finished table in a server closes it for writes.
//! let server = HttpServer::new(ServerConfig::default(), router);
//! server.start().await?;
//! # Ok(())
//! # }
//! ```
//!
//! See the `demos` directory for complete runnable servers.

// Export the parser module
pub mod parser;

// Export the router module
pub mod router;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, HttpRequest, HttpVersion, Method};
pub use router::{normalize_path, not_found_handler, Endpoints, HandlerFn, HandlerFuture, Route, Router};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
