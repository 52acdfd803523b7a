//! ProductService: validated CRUD over a ProductStore.

mod product;
mod validation;
pub use product::ProductService;
pub use validation::{price_max, ProductValidator, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS, PRICE_SCALE};
