//! Biblioteca Server - Library Record Management
//!
//! A Rust REST API server for library record keeping: books, students,
//! and the loans relating them.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use mongodb::{bson::doc, Client};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("biblioteca_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Biblioteca Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect to MongoDB; an unreachable datastore at startup is fatal
    let client = Client::with_uri_str(&config.database.url)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&config.database.name);

    db.run_command(doc! { "ping": 1 }, None)
        .await
        .expect("Failed to reach MongoDB");

    tracing::info!("Connected to MongoDB");

    // Create repository and ensure the unique index on student enrollment
    let repository = Repository::new(&db);
    repository
        .ensure_indexes()
        .await
        .expect("Failed to create datastore indexes");

    tracing::info!("Datastore indexes ensured");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let services = Services::new(repository);

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Books
        .route("/books", get(api::books::list_books))
        .route("/books", post(api::books::create_book))
        .route("/books/:id", put(api::books::update_book))
        .route("/books/:id", delete(api::books::delete_book))
        // Students
        .route("/students", get(api::students::list_students))
        .route("/students", post(api::students::create_student))
        .route("/students/:id", put(api::students::update_student))
        .route("/students/:id", delete(api::students::delete_student))
        // Loans
        .route("/loans", get(api::loans::list_loans))
        .route("/loans", post(api::loans::create_loan))
        .route("/loans/:id", put(api::loans::update_loan))
        .route("/loans/:id", delete(api::loans::delete_loan))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
