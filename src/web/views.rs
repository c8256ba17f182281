//! HTML rendering for the product pages
//!
//! Plain string-building, no template engine. Every interpolated value goes
//! through `escape`.

use crate::database::models::{FieldError, Product, ProductForm};

/// Escape the five HTML metacharacters
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n\
         <h1>{}</h1>\n{}\n</body>\n</html>\n",
        escape(title),
        escape(title),
        body
    )
}

/// Product list table
pub fn index_page(products: &[Product]) -> String {
    let mut rows = String::new();
    for p in products {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/web/products/details/{}\">Details</a> \
             <a href=\"/web/products/edit/{}\">Edit</a> \
             <a href=\"/web/products/delete/{}\">Delete</a></td></tr>\n",
            p.id,
            escape(&p.name),
            escape(&p.color),
            p.stock,
            p.price,
            p.id,
            p.id,
            p.id
        ));
    }

    let body = format!(
        "<p><a href=\"/web/products/create\">New product</a></p>\n\
         <table>\n<tr><th>Id</th><th>Name</th><th>Color</th><th>Stock</th>\
         <th>Price</th><th></th></tr>\n{}</table>",
        rows
    );

    layout("Products", &body)
}

/// Single product detail page
pub fn details_page(product: &Product) -> String {
    let body = format!(
        "<dl>\n<dt>Id</dt><dd>{}</dd>\n<dt>Name</dt><dd>{}</dd>\n\
         <dt>Color</dt><dd>{}</dd>\n<dt>Stock</dt><dd>{}</dd>\n\
         <dt>Price</dt><dd>{}</dd>\n</dl>\n\
         <p><a href=\"/web/products\">Back to list</a></p>",
        product.id,
        escape(&product.name),
        escape(&product.color),
        product.stock,
        product.price
    );

    layout(&product.name, &body)
}

/// Create/edit form, re-rendered with submitted values and field errors on
/// validation failure
pub fn form_page(title: &str, action: &str, form: &ProductForm, errors: &[FieldError]) -> String {
    let mut error_list = String::new();
    if !errors.is_empty() {
        error_list.push_str("<ul class=\"errors\">\n");
        for e in errors {
            error_list.push_str(&format!("<li>{}</li>\n", escape(&e.to_string())));
        }
        error_list.push_str("</ul>\n");
    }

    let body = format!(
        "{}<form method=\"post\" action=\"{}\">\n\
         <label>Name <input name=\"name\" value=\"{}\"></label><br>\n\
         <label>Color <input name=\"color\" value=\"{}\"></label><br>\n\
         <label>Stock <input name=\"stock\" value=\"{}\"></label><br>\n\
         <label>Price <input name=\"price\" value=\"{}\"></label><br>\n\
         {}<button type=\"submit\">Save</button>\n</form>\n\
         <p><a href=\"/web/products\">Back to list</a></p>",
        error_list,
        escape(action),
        escape(&form.name),
        escape(&form.color),
        form.stock,
        form.price,
        form.id
            .map(|id| format!("<input type=\"hidden\" name=\"id\" value=\"{}\">\n", id))
            .unwrap_or_default()
    );

    layout(title, &body)
}

/// Delete confirmation page
pub fn delete_page(product: &Product) -> String {
    let body = format!(
        "<p>Are you sure you want to delete <strong>{}</strong>?</p>\n\
         <form method=\"post\" action=\"/web/products/delete/{}\">\n\
         <button type=\"submit\">Delete</button>\n</form>\n\
         <p><a href=\"/web/products\">Back to list</a></p>",
        escape(&product.name),
        product.id
    );

    layout("Confirm delete", &body)
}
