pub mod catalog;
pub mod item_code;

pub use catalog::{Catalog, CATEGORIES_KEY};
pub use item_code::{rewrite_category_prefix, ItemCodeSpec, DEFAULT_SEASON};
