// Schema for the product catalog database
// Matching migration: CREATE TABLE products (id SERIAL PRIMARY KEY, ...)

diesel::table! {
    products (id) {
        id -> Int4,
        name -> Varchar,
        color -> Varchar,
        stock -> Int4,
        price -> Numeric,
    }
}
