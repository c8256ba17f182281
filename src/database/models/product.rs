use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::database::repositories::Entity;

/// Product entity - a single catalog record
///
/// The identifier is assigned by the store on creation and never changes.
#[derive(
    Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, AsChangeset, Serialize,
    Deserialize, ToSchema,
)]
#[diesel(table_name = crate::database::schema::products)]
pub struct Product {
    /// Unique product ID, assigned by the store
    pub id: i32,

    /// Product name (e.g., "Kalem")
    pub name: String,

    /// Product color
    pub color: String,

    /// Units in stock, never negative
    pub stock: i32,

    /// Unit price
    #[schema(value_type = String, example = "15")]
    pub price: Decimal,
}

/// New product for insertion, before the store has assigned an id
#[derive(Debug, Clone, PartialEq, Insertable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::database::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub color: String,
    pub stock: i32,
    #[schema(value_type = String, example = "15")]
    pub price: Decimal,
}

impl NewProduct {
    /// Presence and sign checks on the scalar fields
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        }
        if self.color.trim().is_empty() {
            errors.push(FieldError::new("color", "color is required"));
        }
        if self.stock < 0 {
            errors.push(FieldError::new("stock", "stock must not be negative"));
        }
        if self.price < Decimal::ZERO {
            errors.push(FieldError::new("price", "price must not be negative"));
        }

        errors
    }
}

impl Entity for Product {
    type Draft = NewProduct;

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(draft: NewProduct, id: i32) -> Self {
        Self {
            id,
            name: draft.name,
            color: draft.color,
            stock: draft.stock,
            price: draft.price,
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Form payload bound by the HTML create/edit pages
///
/// `id` is present on edit submissions and absent on create submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductForm {
    pub id: Option<i32>,
    pub name: String,
    pub color: String,
    pub stock: i32,
    pub price: Decimal,
}

impl ProductForm {
    pub fn validate(&self) -> Vec<FieldError> {
        self.draft().validate()
    }

    /// The insertable draft carried by this form
    pub fn draft(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            color: self.color.clone(),
            stock: self.stock,
            price: self.price,
        }
    }

    /// The full entity this form describes, under the given identifier
    pub fn into_product(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            color: self.color,
            stock: self.stock,
            price: self.price,
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            color: product.color.clone(),
            stock: product.stock,
            price: product.price,
        }
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            color: String::new(),
            stock: 0,
            price: Decimal::ZERO,
        }
    }
}
