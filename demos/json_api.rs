//! A small JSON API demonstrating bulk registration and JSON bodies.

use log::info;
use serde::{Deserialize, Serialize};
use tinymux_rs::{Endpoints, HttpResponse, HttpServer, Router, ServerConfig, StatusCode};

#[derive(Debug, Serialize, Deserialize)]
struct Widget {
    name: String,
    quantity: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut router = Router::new();

    // Register both methods for /widgets in one call. Methods not listed
    // here stay unregistered and answer 404.
    router.register_bulk(
        "/widgets",
        Endpoints::new()
            .get(|_req| async {
                let widgets = vec![
                    Widget {
                        name: "sprocket".to_string(),
                        quantity: 3,
                    },
                    Widget {
                        name: "flange".to_string(),
                        quantity: 12,
                    },
                ];

                HttpResponse::new(StatusCode::Ok).with_json(&widgets)
            })
            .post(|req| async move {
                // Echo the decoded widget back; a malformed body surfaces as
                // a handler error and the server answers 500.
                let widget: Widget = req.json()?;
                HttpResponse::new(StatusCode::Created).with_json(&widget)
            }),
    );

    router.get("/health", |_req| async {
        Ok(HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain")
            .with_body_string("ok"))
    });

    let config = ServerConfig {
        addr: "127.0.0.1:8082".parse()?,
        ..ServerConfig::default()
    };

    info!("Starting JSON API on http://{addr}", addr = config.addr);

    let server = HttpServer::new(config, router);
    server.start().await?;

    Ok(())
}
