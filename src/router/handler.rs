//! Handler types and the bulk-registration builder.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::parser::{HttpRequest, Method};
use crate::server::{Error, HttpResponse, StatusCode};

/// Type alias for a boxed future that returns a Result<HttpResponse, Error>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HttpResponse, Error>> + Send>>;

/// Type alias for a handler function that takes an HttpRequest and returns a HandlerFuture.
pub type HandlerFn = Arc<dyn Fn(HttpRequest) -> HandlerFuture + Send + Sync>;

/// Box an async closure into the shared [`HandlerFn`] representation.
pub(crate) fn into_handler<F, Fut>(handler: F) -> HandlerFn
where
    F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
{
    Arc::new(move |req: HttpRequest| -> HandlerFuture { Box::pin(handler(req)) })
}

/// The handler returned by dispatch when no registered handler matches.
///
/// Invoking it produces a plain `404 Not Found` response with a stable body,
/// so the transport never has to special-case a miss.
pub fn not_found_handler() -> HandlerFn {
    Arc::new(|_req: HttpRequest| -> HandlerFuture {
        Box::pin(async {
            Ok(HttpResponse::new(StatusCode::NotFound)
                .with_content_type("text/plain")
                .with_body_string("404 page not found"))
        })
    })
}

/// A set of per-method handlers for one path, registered in a single call.
///
/// Built with the same per-method names the router itself uses; slots that
/// are never filled stay unset rather than being overwritten with a marker.
///
/// # Examples
///
/// ```
/// use tinymux_rs::{Endpoints, HttpResponse, Router, StatusCode};
///
/// let mut router = Router::new();
/// router.register_bulk(
///     "/widgets",
///     Endpoints::new()
///         .get(|_req| async {
///             Ok(HttpResponse::new(StatusCode::Ok).with_body_string("list"))
///         })
///         .post(|_req| async {
///             Ok(HttpResponse::new(StatusCode::Created).with_body_string("created"))
///         }),
/// );
/// ```
#[derive(Default)]
pub struct Endpoints {
    handlers: [Option<HandlerFn>; Method::COUNT],
}

impl Endpoints {
    /// Create an empty set with every method slot unset.
    pub fn new() -> Self {
        Self {
            handlers: std::array::from_fn(|_| None),
        }
    }

    /// Set the handler for the given method, replacing any previous one.
    pub fn on<F, Fut>(mut self, method: Method, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.handlers[method.index()] = Some(into_handler(handler));
        self
    }

    /// Set the GET handler.
    pub fn get<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.on(Method::GET, handler)
    }

    /// Set the POST handler.
    pub fn post<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.on(Method::POST, handler)
    }

    /// Set the PUT handler.
    pub fn put<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.on(Method::PUT, handler)
    }

    /// Set the PATCH handler.
    pub fn patch<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.on(Method::PATCH, handler)
    }

    /// Set the DELETE handler.
    pub fn delete<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.on(Method::DELETE, handler)
    }

    /// Set the OPTIONS handler.
    pub fn options<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.on(Method::OPTIONS, handler)
    }

    /// Set the HEAD handler.
    pub fn head<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
    {
        self.on(Method::HEAD, handler)
    }

    /// Consume the set, yielding the (method, handler) pairs that were filled.
    pub(crate) fn into_bindings(self) -> impl Iterator<Item = (Method, HandlerFn)> {
        Method::ALL
            .into_iter()
            .zip(self.handlers)
            .filter_map(|(method, handler)| handler.map(|h| (method, h)))
    }
}
