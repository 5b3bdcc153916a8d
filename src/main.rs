use std::net::SocketAddr;

use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod endpoints;
mod model;
mod scoring;

const LIVENESS_JSON: &'static str = r#"{ "message": "EduStream Analytics Service is running" }"#;

#[tokio::main]
async fn main() {
    // Begin logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    // Create the CORS layer
    // The API is consumed directly from browser frontends on other origins,
    // so every origin, method, and header is allowed
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    // Create the application: the liveness route, the prediction route,
    // and the CORS layer wrapped around both
    let app = endpoints::router().layer(cors);

    info!("Routes registered");

    // Serve the application on port 8000
    let server = axum_server::bind("0.0.0.0:8000".parse::<SocketAddr>().unwrap());
    server.serve(app.into_make_service()).await.unwrap();
}
