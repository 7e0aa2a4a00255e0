use crate::{
    cli::{output::Output, prompts::Prompter, ui::colorizer::Colorizer},
    config::{CliMode, Config},
    core::services::ServiceError,
    domain::Catalog,
    errors::StoreError,
    storage::{CatalogStore, YamlStorage},
};

use super::core::CommandError;

/// Everything one menu session works on: the catalog, where it is stored and
/// how output is styled.
pub struct ShellContext {
    pub mode: CliMode,
    pub catalog: Catalog,
    pub storage: Box<dyn CatalogStore>,
    pub output: Output,
    pub colorizer: Colorizer,
}

impl ShellContext {
    /// Loads the catalog from the configured YAML file.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let storage = YamlStorage::new(config.store_path.clone());
        Self::with_storage(Box::new(storage), config)
    }

    pub fn with_storage(storage: Box<dyn CatalogStore>, config: &Config) -> Result<Self, StoreError> {
        let catalog = storage.load()?;
        Ok(Self {
            mode: config.mode,
            catalog,
            storage,
            output: Output::new(config.color),
            colorizer: Colorizer::new(config.color),
        })
    }

    /// Writes the catalog back. A failure is reported and the session keeps
    /// the in-memory state.
    pub fn persist(&self) -> bool {
        match self.storage.save(&self.catalog) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(error = %err, "saving catalog failed");
                self.output.error(format!("Failed to save catalog: {err}"));
                false
            }
        }
    }

    /// Prints a service failure as a warning and turns it into `None`.
    pub fn report<T>(&self, result: Result<T, ServiceError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.output.warning(err);
                None
            }
        }
    }

    /// Lists the categories and asks for a key. Unknown keys, blank input and
    /// end of input all yield `None`.
    pub fn choose_category(
        &self,
        prompter: &mut dyn Prompter,
    ) -> Result<Option<String>, CommandError> {
        self.output.section("Available categories:");
        for (key, name) in self.catalog.categories() {
            self.output.info(self.output.category_row(key, name));
        }
        let answer = prompter.text("Choose category (key, or press Enter to cancel):")?;
        Ok(answer
            .map(|raw| raw.trim().to_lowercase())
            .filter(|key| self.catalog.has_key(key)))
    }
}
