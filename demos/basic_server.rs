//! A basic HTTP server demonstrating the core routing features of tinymux-rs.

use log::info;
use tinymux_rs::{HttpResponse, HttpServer, Router, ServerConfig, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let config = ServerConfig {
        addr: "127.0.0.1:8081".parse()?,
        max_connections: 100,
        read_buffer_size: 4096,
    };

    // Register the routes; registration happens before the server exists,
    // so the table is complete by the time requests arrive.
    let mut router = Router::new();

    router.get("/", |_req| async move {
        Ok(HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body_string("Hello, World!"))
    });

    // A route that reads a query parameter
    router.get("/hello", |req| async move {
        let name = req.get_query_param("name").map_or("World", |s| s.as_str());

        Ok(HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body_string(format!("Hello, {name}!")))
    });

    // A route that returns different status codes
    router.get("/status", |req| async move {
        let status_code = match req.get_query_param("code").map(|s| s.as_str()) {
            Some("404") => StatusCode::NotFound,
            Some("500") => StatusCode::InternalServerError,
            _ => StatusCode::Ok,
        };

        Ok(HttpResponse::new(status_code)
            .with_content_type("text/plain")
            .with_body_string(format!("Status: {}", status_code as u16)))
    });

    info!("Starting server on http://{addr}", addr = config.addr);

    let server = HttpServer::new(config, router);
    server.start().await?;

    Ok(())
}
