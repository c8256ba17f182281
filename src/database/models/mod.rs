pub mod product;

pub use product::{FieldError, NewProduct, Product, ProductForm};
