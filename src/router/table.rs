//! The routing table.

use std::collections::HashMap;
use std::future::Future;

use crate::parser::{HttpRequest, Method};
use crate::router::handler::{into_handler, not_found_handler, Endpoints, HandlerFn};
use crate::router::path::normalize_path;
use crate::router::route::Route;
use crate::server::{Error, HttpResponse};

/// A routing table mapping canonical paths and HTTP methods to handlers.
///
/// A router is an explicit, caller-constructed value; there is no global
/// instance, so independent tables can coexist in one process. Registration
/// takes `&mut self` and happens during setup; dispatch takes `&self`, so
/// once the table is shared (for example behind an `Arc` by
/// [`HttpServer`](crate::server::HttpServer)) it is closed for writes.
///
/// Paths are normalized with [`normalize_path`] on registration AND on
/// dispatch, so `/test`, `/test/` and space-padded variants all address the
/// same route.
///
/// # Examples
///
/// ```
/// use tinymux_rs::{HttpResponse, Method, Router, StatusCode};
///
/// let mut router = Router::new();
/// router.get("/hello", |_req| async {
///     Ok(HttpResponse::new(StatusCode::Ok)
///         .with_content_type("text/plain")
///         .with_body_string("Hello, World!"))
/// });
///
/// // Dispatch never fails; a miss yields the not-found handler.
/// let handler = router.dispatch("/hello", Method::GET);
/// ```
#[derive(Default)]
pub struct Router {
    // canonical path -> route
    routes: HashMap<String, Route>,
}

impl Router {
    /// Create an empty routing table.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a handler for the given path and method.
    ///
    /// The path is normalized first. Registering a (path, method) pair that
    /// already has a handler silently replaces it; this operation never
    /// fails.
    pub fn register<F, Fut>(&mut self, path: impl Into<String>, method: Method, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.bind(path.into(), method, into_handler(handler));
    }

    /// Register handlers for several methods on one path in a single call.
    ///
    /// Methods without a handler in `endpoints` are left untouched, so a
    /// partial [`Endpoints`] never clears existing bindings.
    pub fn register_bulk(&mut self, path: impl Into<String>, endpoints: Endpoints) {
        let path = path.into();
        for (method, handler) in endpoints.into_bindings() {
            self.bind(path.clone(), method, handler);
        }
    }

    /// Register a GET handler.
    pub fn get<F, Fut>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.register(path, Method::GET, handler);
    }

    /// Register a POST handler.
    pub fn post<F, Fut>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.register(path, Method::POST, handler);
    }

    /// Register a PUT handler.
    pub fn put<F, Fut>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.register(path, Method::PUT, handler);
    }

    /// Register a PATCH handler.
    pub fn patch<F, Fut>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.register(path, Method::PATCH, handler);
    }

    /// Register a DELETE handler.
    pub fn delete<F, Fut>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.register(path, Method::DELETE, handler);
    }

    /// Register an OPTIONS handler.
    pub fn options<F, Fut>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.register(path, Method::OPTIONS, handler);
    }

    /// Register a HEAD handler.
    pub fn head<F, Fut>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.register(path, Method::HEAD, handler);
    }

    /// Look up the handler for a request path and method.
    ///
    /// The path is normalized before the lookup, matching registration.
    /// Absence is not an error: an unknown path, or a known path without a
    /// handler for `method`, yields [`not_found_handler`].
    pub fn dispatch(&self, path: &str, method: Method) -> HandlerFn {
        let path = normalize_path(path);

        self.routes
            .get(&path)
            .and_then(|route| route.handler(method))
            .cloned()
            .unwrap_or_else(not_found_handler)
    }

    /// Iterate over the registered routes, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    /// The number of distinct canonical paths registered.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes at all.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn bind(&mut self, path: String, method: Method, handler: HandlerFn) {
        let path = normalize_path(&path);
        let route = self
            .routes
            .entry(path.clone())
            .or_insert_with(|| Route::new(path));
        route.bind(method, handler);
    }
}
