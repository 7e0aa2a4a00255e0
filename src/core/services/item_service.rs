use crate::domain::{rewrite_category_prefix, Catalog, ItemCodeSpec};

use super::{ServiceError, ServiceResult};

pub struct ItemService;

impl ItemService {
    /// Generates the code for `spec` and appends it to its category. Duplicate
    /// codes are accepted.
    pub fn add(catalog: &mut Catalog, spec: &ItemCodeSpec) -> ServiceResult<String> {
        let key = spec.category_key.trim().to_lowercase();
        if !catalog.has_key(&key) {
            return Err(ServiceError::UnknownCategory(key));
        }
        let code = spec.to_code().ok_or(ServiceError::MissingItemName)?;
        catalog
            .items_for_mut(&key)
            .ok_or_else(|| ServiceError::UnknownCategory(key.clone()))?
            .push(code.clone());
        tracing::debug!(%key, %code, "item added");
        Ok(code)
    }

    pub fn list<'a>(catalog: &'a Catalog, key: &str) -> ServiceResult<&'a [String]> {
        catalog
            .items_for(key)
            .ok_or_else(|| ServiceError::UnknownCategory(key.to_string()))
    }

    /// Replaces the code at `position` verbatim (trimmed). Returns the previous
    /// code.
    pub fn edit(
        catalog: &mut Catalog,
        key: &str,
        position: usize,
        new_code: &str,
    ) -> ServiceResult<String> {
        let new_code = new_code.trim();
        if new_code.is_empty() {
            return Err(ServiceError::EmptyCode);
        }
        let slot = Self::items_mut(catalog, key)?
            .get_mut(position)
            .ok_or(ServiceError::InvalidSelection)?;
        let previous = std::mem::replace(slot, new_code.to_string());
        tracing::debug!(%key, %previous, code = %new_code, "item edited");
        Ok(previous)
    }

    /// Moves the item at `position` to the end of `destination`'s list with its
    /// leading token rewritten to the destination key. Returns the new code.
    pub fn relocate(
        catalog: &mut Catalog,
        key: &str,
        position: usize,
        destination: &str,
    ) -> ServiceResult<String> {
        let source_name = catalog
            .category_name(key)
            .ok_or_else(|| ServiceError::UnknownCategory(key.to_string()))?;
        let destination_name = catalog
            .category_name(destination)
            .ok_or_else(|| ServiceError::UnknownCategory(destination.to_string()))?;
        if source_name == destination_name {
            return Err(ServiceError::SameCategory);
        }

        let items = Self::items_mut(catalog, key)?;
        if position >= items.len() {
            return Err(ServiceError::InvalidSelection);
        }
        let code = items.remove(position);
        let moved = rewrite_category_prefix(&code, destination);
        catalog
            .items_for_mut(destination)
            .ok_or_else(|| ServiceError::UnknownCategory(destination.to_string()))?
            .push(moved.clone());
        tracing::debug!(from = %key, to = %destination, %code, %moved, "item moved");
        Ok(moved)
    }

    /// Removes and returns the code at `position`.
    pub fn remove(catalog: &mut Catalog, key: &str, position: usize) -> ServiceResult<String> {
        let items = Self::items_mut(catalog, key)?;
        if position >= items.len() {
            return Err(ServiceError::InvalidSelection);
        }
        let code = items.remove(position);
        tracing::debug!(%key, %code, "item removed");
        Ok(code)
    }

    /// The existing list for `key`; a category without a list has nothing to
    /// select.
    fn items_mut<'a>(catalog: &'a mut Catalog, key: &str) -> ServiceResult<&'a mut Vec<String>> {
        let name = catalog
            .category_name(key)
            .ok_or_else(|| ServiceError::UnknownCategory(key.to_string()))?
            .to_string();
        catalog
            .items
            .get_mut(&name)
            .ok_or(ServiceError::InvalidSelection)
    }
}
