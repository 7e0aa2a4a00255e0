//! Dash-joined item codes: `category-item[-details]-season[-index]`.

/// Season token used when none is supplied.
pub const DEFAULT_SEASON: &str = "n";

/// Conventional season tokens: summer, winter and neutral.
pub const SEASONS: [(&str, &str); 3] = [("s", "summer"), ("w", "winter"), ("n", "neutral")];

const SEPARATOR: char = '-';

/// Raw fields collected for a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCodeSpec {
    pub category_key: String,
    pub name: String,
    pub details: Option<String>,
    pub season: Option<String>,
    pub index: Option<String>,
}

impl ItemCodeSpec {
    pub fn new(category_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category_key: category_key.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Normalized item name; empty when the caller supplied only whitespace.
    pub fn item_name(&self) -> String {
        normalize(&self.name)
    }

    /// Builds the code. Fields are trimmed and lower-cased, empty optional
    /// fields are skipped and a blank season falls back to [`DEFAULT_SEASON`].
    ///
    /// Returns `None` when the item name is empty.
    pub fn to_code(&self) -> Option<String> {
        let name = self.item_name();
        if name.is_empty() {
            return None;
        }

        let mut parts = vec![normalize(&self.category_key), name];
        if let Some(details) = non_empty(self.details.as_deref()) {
            parts.push(details);
        }
        parts.push(non_empty(self.season.as_deref()).unwrap_or_else(|| DEFAULT_SEASON.to_string()));
        if let Some(index) = non_empty(self.index.as_deref()) {
            parts.push(index);
        }

        Some(parts.join("-"))
    }
}

/// Replaces the leading category token of `code` with `new_key`, keeping the
/// remaining tokens as they are. A code without a separator becomes `new_key`.
pub fn rewrite_category_prefix(code: &str, new_key: &str) -> String {
    match code.split_once(SEPARATOR) {
        Some((_, rest)) => format!("{new_key}{SEPARATOR}{rest}"),
        None => new_key.to_string(),
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|value| !value.is_empty())
}
