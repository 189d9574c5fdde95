use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use mimalloc::MiMalloc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vitrina::config::AppConfig;
use vitrina::{routes, AppState};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrina=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    let pool = vitrina::db::create_pool(&config.database_url, config.database_max_connections)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(host = %addr, "Starting vitrina API server");

    let state = AppState {
        db: pool,
        config: config.clone(),
    };

    let cors = match config.storefront_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = api_router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// All API routes under /api/v1, plus health probes at the root.
fn api_router() -> Router<AppState> {
    let api = Router::new()
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/refresh", post(routes::auth::refresh))
        .route("/auth/logout", post(routes::auth::logout))
        .route("/auth/users", post(routes::auth::create_user))
        .route("/auth/me", get(routes::auth::me))
        .route("/dashboard", get(routes::dashboard::stats))
        .route("/orders", get(routes::orders::list))
        .route("/orders/{id}", get(routes::orders::get_by_id))
        .route("/orders/{id}/status", patch(routes::orders::update_status))
        .route(
            "/products",
            get(routes::products::list).post(routes::products::create),
        )
        .route(
            "/products/{id}",
            get(routes::products::get_by_id)
                .put(routes::products::update)
                .delete(routes::products::delete),
        )
        .route(
            "/categories",
            get(routes::categories::list).post(routes::categories::create),
        )
        .route("/categories/{id}", delete(routes::categories::delete));

    Router::new()
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .nest("/api/v1", api)
}
