use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use super::responses::ErrorResponse;
use crate::database::models::{NewProduct, Product};
use crate::database::repositories::{Repository, RepositoryError};

/// Shared application state for both the API and web handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn Repository<Product>>,
}

/// API error body in the shared `ErrorResponse` shape
fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: status.to_string(),
            message,
        }),
    )
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy"
    }))
}

/// Get all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "List of all products", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, (StatusCode, Json<ErrorResponse>)> {
    state.repository.get_all().await.map(Json).map_err(|e| {
        tracing::error!("Failed to get products: {}", e);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, (StatusCode, Json<ErrorResponse>)> {
    state
        .repository
        .get_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .map(Json)
        .ok_or_else(|| {
            error_response(StatusCode::NOT_FOUND, format!("Product {} not found", id))
        })
}

/// Update a product
///
/// The route id must match the id in the body; the full record is replaced.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = Product,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Route id does not match body id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn put_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(product): Json<Product>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    if id != product.id {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Route id {} does not match product id {}", id, product.id),
        ));
    }

    match state.repository.update(&product) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(RepositoryError::NotFound) => Err(error_response(
            StatusCode::NOT_FOUND,
            format!("Product {} not found", id),
        )),
        Err(e) => {
            tracing::error!("Failed to update product {}: {}", id, e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
            ))
        }
    }
}

/// Create a product
///
/// The store assigns the identifier; the response carries the created entity
/// and a Location header pointing at its GET endpoint.
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn post_product(
    State(state): State<AppState>,
    Json(draft): Json<NewProduct>,
) -> Result<
    (StatusCode, [(HeaderName, String); 1], Json<Product>),
    (StatusCode, Json<ErrorResponse>),
> {
    let errors = draft.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            messages.join(", "),
        ));
    }

    let created = state.repository.create(draft).await.map_err(|e| {
        tracing::error!("Failed to create product: {}", e);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/products/{}", created.id))],
        Json(created),
    ))
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted, body is the deleted id", body = i32),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<i32>, (StatusCode, Json<ErrorResponse>)> {
    let product = state
        .repository
        .get_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .ok_or_else(|| {
            error_response(StatusCode::NOT_FOUND, format!("Product {} not found", id))
        })?;

    match state.repository.delete(&product) {
        Ok(()) => Ok(Json(id)),
        Err(RepositoryError::NotFound) => Err(error_response(
            StatusCode::NOT_FOUND,
            format!("Product {} not found", id),
        )),
        Err(e) => {
            tracing::error!("Failed to delete product {}: {}", id, e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
            ))
        }
    }
}
