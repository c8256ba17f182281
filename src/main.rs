use product_catalog_api::database::repositories::{
    InMemoryRepository, PgProductRepository, Repository,
};
use product_catalog_api::database::establish_connection_pool;
use product_catalog_api::{create_router, AppState, Product};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_catalog_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        repository: build_repository(),
    };

    let app = create_router(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Product catalog server running on http://{}", addr);
    tracing::info!("API: http://{}/products", addr);
    tracing::info!("Web UI: http://{}/web/products", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.unwrap();
}

/// Select the product store: PostgreSQL when DATABASE_URL is configured, an
/// in-memory store otherwise
fn build_repository() -> Arc<dyn Repository<Product>> {
    match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool_size = std::env::var("DB_POOL_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10);

            let pool = establish_connection_pool(&database_url, pool_size)
                .expect("database pool initialization failed");

            tracing::info!("Using PostgreSQL product store");
            Arc::new(PgProductRepository::new(move || pool.get_conn()))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using in-memory product store");
            Arc::new(InMemoryRepository::<Product>::new())
        }
    }
}
