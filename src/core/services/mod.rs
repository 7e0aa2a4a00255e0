pub mod category_service;
pub mod item_service;

pub use category_service::{CategoryChange, CategoryService};
pub use item_service::ItemService;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures caused by user input; none of them leave the catalog modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Key and name are required.")]
    MissingKeyOrName,
    #[error("Item name required.")]
    MissingItemName,
    #[error("No changes made.")]
    EmptyCode,
    #[error("Category `{0}` not found.")]
    UnknownCategory(String),
    #[error("A category with key `{0}` already exists.")]
    KeyTaken(String),
    #[error("A category with name `{0}` already exists.")]
    NameTaken(String),
    #[error("`{0}` is reserved and cannot be used as a category name.")]
    ReservedName(String),
    #[error("Invalid selection.")]
    InvalidSelection,
    #[error("Item already in this category.")]
    SameCategory,
}
