//! Web router using Axum

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use homefront_core::{Locale, SiteConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};

type SharedConfig = Arc<SiteConfig>;

/// Create the web router
///
/// Serves the JSON API under `/api` and the compiled front end from
/// `config.dist_dir`, falling back to `index.html` for client-side routes.
pub fn create_router(config: SiteConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let dist = config.dist_dir.clone();
    let index = dist.join("index.html");

    let api = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/config", get(config_handler))
        .route("/api/locales/{code}", get(locale_handler));

    let router = if index.exists() {
        debug!(dist = %dist.display(), "Serving front end");
        api.fallback_service(ServeDir::new(&dist).fallback(ServeFile::new(index)))
    } else {
        warn!(dist = %dist.display(), "Front end not built; serving API only");
        api.route("/", get(build_required_handler))
    };

    router.layer(cors).with_state(Arc::new(config))
}

async fn health_handler(State(config): State<SharedConfig>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "site": config.site_name,
        "locales": Locale::ALL.iter().map(Locale::code).collect::<Vec<_>>(),
        "frontend": config.dist_dir.join("index.html").exists(),
    }))
}

async fn config_handler(State(config): State<SharedConfig>) -> Json<Value> {
    Json(serde_json::to_value(config.public()).unwrap_or(Value::Null))
}

async fn locale_handler(Path(code): Path<String>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match code.parse::<Locale>() {
        Ok(locale) => Ok(Json(locale.dictionary().as_value().clone())),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": e.to_string() })),
        )),
    }
}

async fn build_required_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Homefront - Build Required</title>
    <style>
        body { font-family: system-ui, -apple-system, sans-serif; background: #F7F9FB; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
        .setup-message { max-width: 560px; background: #fff; padding: 2rem; border-radius: 12px; box-shadow: 0 6px 20px rgba(12,21,36,0.08); }
        code { background: #f0f0f0; padding: 0.2rem 0.4rem; border-radius: 4px; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>Front end not built</h1>
        <p>Compile the Leptos app before starting the server:</p>
        <ol>
            <li><code>rustup target add wasm32-unknown-unknown</code></li>
            <li><code>cd crates/homefront-web &amp;&amp; trunk build --release</code></li>
            <li><code>cargo run -- serve</code></li>
        </ol>
        <p>API: <a href="/api/health">/api/health</a>, <a href="/api/config">/api/config</a>, <a href="/api/locales/en">/api/locales/en</a></p>
    </div>
</body>
</html>"#,
    )
}
