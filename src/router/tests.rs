//! Tests for the routing table.

#[cfg(test)]
mod router_tests {
    use std::collections::HashMap;

    use crate::parser::{HttpRequest, HttpVersion, Method};
    use crate::router::{normalize_path, not_found_handler, Endpoints, HandlerFuture, Router};
    use crate::server::{Error, HttpResponse, StatusCode};

    // Build a request the way the transport would hand it to the router.
    fn request(method: Method, path: &str) -> HttpRequest {
        HttpRequest::new(method, path.to_string(), HttpVersion::Http11, HashMap::new())
    }

    // A handler that always answers 200 with the given body.
    fn respond(
        body: &'static str,
    ) -> impl Fn(HttpRequest) -> HandlerFuture + Send + Sync + 'static {
        move |_req| -> HandlerFuture {
            Box::pin(async move {
                Ok::<HttpResponse, Error>(
                    HttpResponse::new(StatusCode::Ok)
                        .with_content_type("text/plain")
                        .with_body_string(body),
                )
            })
        }
    }

    // Dispatch and invoke, returning what the transport would observe.
    async fn dispatch_response(router: &Router, method: Method, path: &str) -> HttpResponse {
        let handler = router.dispatch(path, method);
        handler(request(method, path)).await.unwrap()
    }

    #[test]
    fn test_new_router_is_empty() {
        let router = Router::new();
        assert!(router.is_empty());
        assert_eq!(router.len(), 0);
    }

    #[test]
    fn test_normalize_path_variants() {
        let cases = [
            ("/hello/hi", "/hello/hi/"),
            ("/hello", "/hello/"),
            ("/hello/hi      ", "/hello/hi/"),
            ("/hello     ", "/hello/"),
            ("", "/"),
            (" ", "/"),
        ];

        for (raw, expected) in cases {
            assert_eq!(normalize_path(raw), expected);
        }
    }

    #[test]
    fn test_normalize_path_idempotent() {
        for raw in ["/hello", "  /hello  ", "/hello/", "", "   ", "/a/b/c"] {
            let once = normalize_path(raw);
            assert_eq!(normalize_path(&once), once);
        }
    }

    #[test]
    fn test_normalize_path_collapses_equivalent_spellings() {
        assert_eq!(normalize_path("/hello"), normalize_path("/hello/"));
        assert_eq!(normalize_path("/hello"), normalize_path("  /hello  "));
        assert_eq!(normalize_path("/hello"), "/hello/");
    }

    #[test]
    fn test_route_metadata() {
        let mut router = Router::new();
        router.get("/test", respond("ok"));

        let route = router
            .routes()
            .find(|route| route.path() == "/test/")
            .expect("route missing");

        assert_eq!(route.path(), "/test/");
        assert!(route.handler(Method::GET).is_some());
        assert!(route.handler(Method::POST).is_none());
        assert_eq!(route.methods().collect::<Vec<_>>(), vec![Method::GET]);
    }

    #[test]
    fn test_multiple_routes_registered() {
        let mut router = Router::new();
        router.get("/test1/", respond("one"));
        router.get("/test2/", respond("two"));

        assert_eq!(router.len(), 2);
        let mut paths: Vec<&str> = router.routes().map(|route| route.path()).collect();
        paths.sort_unstable();
        assert_eq!(paths, vec!["/test1/", "/test2/"]);
    }

    #[test]
    fn test_multiple_methods_on_one_route() {
        let mut router = Router::new();
        for method in [Method::GET, Method::POST, Method::PATCH] {
            router.register("/test1/", method, respond("ok"));
        }

        assert_eq!(router.len(), 1);
        let route = router.routes().next().unwrap();
        let methods: Vec<Method> = route.methods().collect();
        assert_eq!(methods, vec![Method::GET, Method::POST, Method::PATCH]);
    }

    #[tokio::test]
    async fn test_register_then_dispatch() {
        let mut router = Router::new();
        router.get("/test", respond("yolo"));

        let response = dispatch_response(&router, Method::GET, "/test/").await;
        assert_eq!(response.status, StatusCode::Ok);
        assert_eq!(response.body, b"yolo".to_vec());
    }

    #[tokio::test]
    async fn test_dispatch_normalizes_like_register() {
        let mut router = Router::new();
        router.get("/test", respond("ok"));

        // All spellings of the path reach the same route.
        for path in ["/test", "/test/", "  /test  "] {
            let response = dispatch_response(&router, Method::GET, path).await;
            assert_eq!(response.status, StatusCode::Ok, "path {path:?} missed");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let router = Router::new();

        for method in Method::ALL {
            let response = dispatch_response(&router, method, "/test/").await;
            assert_eq!(response.status, StatusCode::NotFound);
            assert_eq!(response.body, b"404 page not found".to_vec());
        }
    }

    #[tokio::test]
    async fn test_unregistered_method_is_not_found() {
        let mut router = Router::new();
        router.get("/test1/", respond("ok"));

        let response = dispatch_response(&router, Method::POST, "/test1/").await;
        assert_eq!(response.status, StatusCode::NotFound);
    }

    #[tokio::test]
    async fn test_reregistration_replaces_handler() {
        let mut router = Router::new();
        router.get("/test", respond("old"));
        router.get("/test", respond("new"));

        let response = dispatch_response(&router, Method::GET, "/test").await;
        assert_eq!(response.body, b"new".to_vec());
        assert_eq!(router.len(), 1);
    }

    #[tokio::test]
    async fn test_routes_are_independent() {
        let mut router = Router::new();
        router.get("/one", respond("one"));
        router.get("/two", respond("two"));

        // Binding more methods on one route leaves the other untouched.
        router.post("/one", respond("one-post"));

        let response = dispatch_response(&router, Method::POST, "/two").await;
        assert_eq!(response.status, StatusCode::NotFound);

        let response = dispatch_response(&router, Method::GET, "/two").await;
        assert_eq!(response.body, b"two".to_vec());
    }

    #[tokio::test]
    async fn test_items_scenario() {
        let mut router = Router::new();
        router.get("/items/", respond("A"));
        router.post("/items/", respond("B"));

        let response = dispatch_response(&router, Method::GET, "/items/").await;
        assert_eq!(response.body, b"A".to_vec());

        let response = dispatch_response(&router, Method::POST, "/items/").await;
        assert_eq!(response.body, b"B".to_vec());

        let response = dispatch_response(&router, Method::DELETE, "/items/").await;
        assert_eq!(response.status, StatusCode::NotFound);

        let response = dispatch_response(&router, Method::GET, "/missing/").await;
        assert_eq!(response.status, StatusCode::NotFound);
    }

    #[tokio::test]
    async fn test_register_bulk() {
        let mut router = Router::new();
        router.register_bulk("/widgets", Endpoints::new().get(respond("C")));

        let response = dispatch_response(&router, Method::GET, "/widgets/").await;
        assert_eq!(response.body, b"C".to_vec());

        let response = dispatch_response(&router, Method::POST, "/widgets/").await;
        assert_eq!(response.status, StatusCode::NotFound);
    }

    #[tokio::test]
    async fn test_register_bulk_keeps_existing_bindings() {
        let mut router = Router::new();
        router.get("/widgets", respond("existing"));
        router.register_bulk("/widgets", Endpoints::new().post(respond("posted")));

        // The partial bulk set must not clear the GET slot.
        let response = dispatch_response(&router, Method::GET, "/widgets").await;
        assert_eq!(response.body, b"existing".to_vec());

        let response = dispatch_response(&router, Method::POST, "/widgets").await;
        assert_eq!(response.body, b"posted".to_vec());
    }

    #[tokio::test]
    async fn test_not_found_handler_response() {
        let handler = not_found_handler();
        let response = handler(request(Method::GET, "/anywhere/")).await.unwrap();

        assert_eq!(response.status, StatusCode::NotFound);
        assert_eq!(response.body, b"404 page not found".to_vec());
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/plain")
        );
    }
}
