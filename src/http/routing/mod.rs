use axum::{routing::get, Router};

pub fn app(todos: Router) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", todos)
}
