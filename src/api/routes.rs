use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::*;
use super::openapi::ApiDoc;
use crate::web;

/// Create the application router with the JSON API, the HTML front end and
/// Swagger UI
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health endpoint
        .route("/health", get(health_check))
        // Product API endpoints
        .route("/products", get(get_products))
        .route("/products", post(post_product))
        .route("/products/:id", get(get_product))
        .route("/products/:id", put(put_product))
        .route("/products/:id", delete(delete_product))
        // HTML front end
        .route("/web/products", get(web::handlers::index))
        .route("/web/products/details", get(web::handlers::details))
        .route("/web/products/details/:id", get(web::handlers::details))
        .route("/web/products/create", get(web::handlers::create_form))
        .route("/web/products/create", post(web::handlers::create))
        .route("/web/products/edit", get(web::handlers::edit_form))
        .route("/web/products/edit/:id", get(web::handlers::edit_form))
        .route("/web/products/edit/:id", post(web::handlers::edit))
        .route("/web/products/delete/:id", get(web::handlers::delete_form))
        .route("/web/products/delete/:id", post(web::handlers::delete_confirmed))
        .with_state(state)
}
