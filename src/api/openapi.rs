use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::responses::ErrorResponse;
use crate::database::models::{NewProduct, Product};

/// OpenAPI specification for the product catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "0.1.0",
        description = "A minimal product catalog REST API backed by a generic repository"
    ),
    paths(
        handlers::health_check,
        handlers::get_products,
        handlers::get_product,
        handlers::put_product,
        handlers::post_product,
        handlers::delete_product,
    ),
    components(
        schemas(
            Product,
            NewProduct,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;
