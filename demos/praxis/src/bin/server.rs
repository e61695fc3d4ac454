//! Serves the demo site twice: at `/` like a custom domain, and under
//! `/praxis/` like a project page on a shared host.

use axum::Router;
use tower_http::services::ServeDir;

const PROJECT_PREFIX: &str = "/praxis";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let static_dir = std::env::var("PRAXIS_STATIC_DIR")
        .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_owned());
    let addr = std::env::var("PRAXIS_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_owned());

    let app = Router::new()
        .nest_service(PROJECT_PREFIX, ServeDir::new(&static_dir))
        .fallback_service(ServeDir::new(&static_dir));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("Root deployment:    http://{addr}/");
    println!("Project deployment: http://{addr}{PROJECT_PREFIX}/");

    axum::serve(listener, app).await?;

    Ok(())
}
