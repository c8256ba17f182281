use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use super::views;
use crate::api::AppState;
use crate::database::models::ProductForm;
use crate::database::repositories::RepositoryError;

const LIST_URL: &str = "/web/products";

fn server_error(context: &str, e: RepositoryError) -> Response {
    tracing::error!("{}: {}", context, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<p>Something went wrong.</p>".to_string()),
    )
        .into_response()
}

/// List page: all products in a table
pub async fn index(State(state): State<AppState>) -> Response {
    match state.repository.get_all().await {
        Ok(products) => Html(views::index_page(&products)).into_response(),
        Err(e) => server_error("Failed to list products", e),
    }
}

/// Detail page. A missing id redirects to the list; an unknown id is 404.
pub async fn details(State(state): State<AppState>, id: Option<Path<i32>>) -> Response {
    let Some(Path(id)) = id else {
        return Redirect::to(LIST_URL).into_response();
    };

    match state.repository.get_by_id(id).await {
        Ok(Some(product)) => Html(views::details_page(&product)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => server_error("Failed to load product", e),
    }
}

/// Empty create form, no repository access
pub async fn create_form() -> Response {
    Html(views::form_page(
        "New product",
        "/web/products/create",
        &ProductForm::default(),
        &[],
    ))
    .into_response()
}

/// Create submission. Invalid input re-renders the form with the submitted
/// values; valid input is persisted and redirects to the list.
pub async fn create(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Response {
    let errors = form.validate();
    if !errors.is_empty() {
        return Html(views::form_page(
            "New product",
            "/web/products/create",
            &form,
            &errors,
        ))
        .into_response();
    }

    match state.repository.create(form.draft()).await {
        Ok(_) => Redirect::to(LIST_URL).into_response(),
        Err(e) => server_error("Failed to create product", e),
    }
}

/// Edit form, pre-filled with the stored entity
pub async fn edit_form(State(state): State<AppState>, id: Option<Path<i32>>) -> Response {
    let Some(Path(id)) = id else {
        return Redirect::to(LIST_URL).into_response();
    };

    match state.repository.get_by_id(id).await {
        Ok(Some(product)) => Html(views::form_page(
            "Edit product",
            &format!("/web/products/edit/{}", id),
            &ProductForm::from_product(&product),
            &[],
        ))
        .into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => server_error("Failed to load product", e),
    }
}

/// Edit submission. The route id must match the submitted id.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Response {
    if form.id != Some(id) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let errors = form.validate();
    if !errors.is_empty() {
        return Html(views::form_page(
            "Edit product",
            &format!("/web/products/edit/{}", id),
            &form,
            &errors,
        ))
        .into_response();
    }

    match state.repository.update(&form.into_product(id)) {
        Ok(()) => Redirect::to(LIST_URL).into_response(),
        Err(RepositoryError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => server_error("Failed to update product", e),
    }
}

/// Delete confirmation page for an existing product
pub async fn delete_form(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match state.repository.get_by_id(id).await {
        Ok(Some(product)) => Html(views::delete_page(&product)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => server_error("Failed to load product", e),
    }
}

/// Confirmed delete. Existence is re-checked so deleting an already-removed
/// record is a deterministic 404.
pub async fn delete_confirmed(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let product = match state.repository.get_by_id(id).await {
        Ok(Some(product)) => product,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => return server_error("Failed to load product", e),
    };

    match state.repository.delete(&product) {
        Ok(()) => Redirect::to(LIST_URL).into_response(),
        Err(RepositoryError::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => server_error("Failed to delete product", e),
    }
}
