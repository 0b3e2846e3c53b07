use serde::{Deserialize, Serialize};

pub mod posts;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            app: AppConfig {
                name: "Keijiban".to_string(),
                log_level: "info".to_string(),
            },
        }
    }
}

use axum::{Router, response::Json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub store: posts::SharedPostStore,
    pub config: Config,
}

async fn greet_handler() -> Json<&'static str> {
    Json("Hello, world!")
}

async fn about_handler() -> Json<&'static str> {
    Json("This is a simple HTTP API.")
}

pub async fn create_app(config: Config) -> Router {
    let store = Arc::new(posts::PostStore::with_seed_posts());

    let app_state = AppState { store, config };

    Router::new()
        .route("/", axum::routing::get(greet_handler))
        .route("/about", axum::routing::get(about_handler))
        .route(
            "/posts",
            axum::routing::get(posts::handlers::list_posts_handler)
                .post(posts::handlers::create_post_handler),
        )
        .route(
            "/posts/{post_id}",
            axum::routing::get(posts::handlers::get_post_handler)
                .put(posts::handlers::update_post_handler)
                .delete(posts::handlers::delete_post_handler),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let method = request.method();
                    let uri = request.uri();
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!(
                        "http_request",
                        method = %method,
                        uri = %uri,
                        matched_path,
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    let method = request.method();
                    let uri = request.uri();
                    let user_agent = request
                        .headers()
                        .get("user-agent")
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("-");

                    tracing::info!(
                        target: "access_log",
                        method = %method,
                        path = %uri.path(),
                        user_agent = %user_agent,
                        "request"
                    );
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = response.status();

                        tracing::info!(
                            target: "access_log",
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "response"
                        );
                    },
                ),
        )
        .with_state(app_state)
}
