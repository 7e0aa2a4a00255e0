use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::Catalog;

use super::{CatalogStore, Result};

const TMP_SUFFIX: &str = "tmp";

/// Stores the catalog as a single YAML document at a fixed path.
#[derive(Debug, Clone)]
pub struct YamlStorage {
    path: PathBuf,
}

impl YamlStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for YamlStorage {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "catalog file missing, starting empty");
            return Ok(Catalog::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let catalog = from_yaml(&data)?;
        for name in catalog.orphan_lists() {
            tracing::warn!(list = %name, "item list has no matching category");
        }
        tracing::debug!(
            path = %self.path.display(),
            categories = catalog.categories.len(),
            items = catalog.item_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Writes the catalog next to its destination first, then renames it into
    /// place.
    fn save(&self, catalog: &Catalog) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let yaml = to_yaml(catalog)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, yaml)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "catalog saved");
        Ok(())
    }
}

/// Serializes the catalog with `categories` first and lists in sorted order.
pub fn to_yaml(catalog: &Catalog) -> Result<String> {
    Ok(serde_yaml::to_string(catalog)?)
}

/// Parses a catalog document; blank input is an empty catalog.
pub fn from_yaml(data: &str) -> Result<Catalog> {
    if data.trim().is_empty() {
        return Ok(Catalog::default());
    }
    Ok(serde_yaml::from_str(data)?)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
