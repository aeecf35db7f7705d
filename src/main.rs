use std::net::SocketAddr;

use anyhow::Context;
use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::domain::repository::TodoRepository;
use todo_api::http::{routes::todos, routing};
use todo_api::infrastructure::sqlite_repo::SqliteTodoRepository;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let repo = SqliteTodoRepository::connect(&database_url)
        .await
        .with_context(|| format!("connecting to {database_url}"))?;
    repo.init().await.context("creating todos table")?;
    tracing::info!("connected to store");

    let service = TodoServiceImpl::new(repo);
    let mut router = routing::app(todos::router(todos::AppState { service }));
    if std::env::var("ENV").as_deref() == Ok("production") {
        // serve the prebuilt client bundle; API routes keep priority
        router = router.fallback_service(ServeDir::new("client/dist"));
    }

    let port: u16 = match std::env::var("PORT") {
        Ok(port) => port.parse().context("PORT is not a number")?,
        Err(_) => 8080,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown");
}
