use crate::domain::{rewrite_category_prefix, Catalog, CATEGORIES_KEY};

use super::{ServiceError, ServiceResult};

/// Outcome of a successful category modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChange {
    pub key: String,
    pub name: String,
    pub rewritten_codes: usize,
}

pub struct CategoryService;

impl CategoryService {
    /// Registers `key -> name` and makes sure an item list exists for `name`.
    pub fn add(catalog: &mut Catalog, key: &str, name: &str) -> ServiceResult<()> {
        let key = normalize_key(key);
        let name = name.trim();
        if key.is_empty() || name.is_empty() {
            return Err(ServiceError::MissingKeyOrName);
        }
        Self::validate_name(catalog, None, name)?;
        if catalog.has_key(&key) {
            return Err(ServiceError::KeyTaken(key));
        }

        catalog.categories.insert(key.clone(), name.to_string());
        catalog.items.entry(name.to_string()).or_default();
        tracing::debug!(%key, %name, "category added");
        Ok(())
    }

    /// Removes the category and purges its item list. Returns the removed
    /// name and how many items went with it.
    pub fn remove(catalog: &mut Catalog, key: &str) -> ServiceResult<(String, usize)> {
        let name = catalog
            .categories
            .remove(key)
            .ok_or_else(|| ServiceError::UnknownCategory(key.to_string()))?;
        let purged = catalog.items.remove(&name).map_or(0, |items| items.len());
        tracing::debug!(%key, %name, purged, "category removed");
        Ok((name, purged))
    }

    /// Changes the key and/or name of an existing category. `None` or blank
    /// values keep the current one.
    ///
    /// A new name carries the item list along; a new key rewrites the leading
    /// token of every code in that list.
    pub fn modify(
        catalog: &mut Catalog,
        old_key: &str,
        new_key: Option<&str>,
        new_name: Option<&str>,
    ) -> ServiceResult<CategoryChange> {
        let old_name = catalog
            .category_name(old_key)
            .ok_or_else(|| ServiceError::UnknownCategory(old_key.to_string()))?
            .to_string();

        let new_key = new_key
            .map(normalize_key)
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| old_key.to_string());
        let new_name = new_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(old_name.as_str())
            .to_string();

        if new_key != old_key && catalog.has_key(&new_key) {
            return Err(ServiceError::KeyTaken(new_key));
        }
        if new_name != old_name {
            Self::validate_name(catalog, Some(old_key), &new_name)?;
        }

        let mut items = catalog.items.remove(&old_name).unwrap_or_default();
        let mut rewritten_codes = 0;
        if new_key != old_key {
            for code in items.iter_mut() {
                *code = rewrite_category_prefix(code, &new_key);
                rewritten_codes += 1;
            }
        }

        catalog.categories.remove(old_key);
        catalog.categories.insert(new_key.clone(), new_name.clone());
        catalog.items.insert(new_name.clone(), items);

        tracing::debug!(
            %old_key,
            %new_key,
            %old_name,
            %new_name,
            rewritten_codes,
            "category modified"
        );
        Ok(CategoryChange {
            key: new_key,
            name: new_name,
            rewritten_codes,
        })
    }

    /// A name is taken when a category other than `exclude` maps to it. When
    /// renaming, an orphan list under that name blocks it too; add adopts it.
    fn validate_name(catalog: &Catalog, exclude: Option<&str>, candidate: &str) -> ServiceResult<()> {
        if candidate == CATEGORIES_KEY {
            return Err(ServiceError::ReservedName(candidate.to_string()));
        }
        let owner = catalog.key_for_name(candidate);
        let taken = match (owner, exclude) {
            (Some(owner), Some(exclude)) => owner != exclude,
            (Some(_), None) => true,
            (None, Some(_)) => catalog.items.contains_key(candidate),
            (None, None) => false,
        };
        if taken {
            Err(ServiceError::NameTaken(candidate.to_string()))
        } else {
            Ok(())
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
