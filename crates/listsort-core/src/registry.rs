//! Registry of paginated listings, resolved by name.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::PaginatedSource;
use crate::types::pagination::PaginateOptions;

/// A sortable column header of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortColumn {
    /// Text shown in the header link.
    pub label: String,
    /// Sort spec the column sorts by, e.g. `"last_name, first_name"`.
    pub field: String,
    /// Whether this column is the listing's implicit sort order.
    #[serde(default)]
    pub default: bool,
}

impl SortColumn {
    /// A regular column.
    pub fn new(label: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field: field.into(),
            default: false,
        }
    }

    /// Mark this column as the implicit sort order.
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// A named data source together with its sortable columns.
#[derive(Debug, Clone)]
pub struct Listing {
    name: String,
    source: Arc<dyn PaginatedSource>,
    columns: Vec<SortColumn>,
}

impl Listing {
    /// Create a listing with no sortable columns.
    pub fn new(name: impl Into<String>, source: Arc<dyn PaginatedSource>) -> Self {
        Self {
            name: name.into(),
            source,
            columns: Vec::new(),
        }
    }

    /// Add a sortable column.
    pub fn column(mut self, column: SortColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The data source.
    pub fn source(&self) -> &Arc<dyn PaginatedSource> {
        &self.source
    }

    /// Sortable columns in display order.
    pub fn columns(&self) -> &[SortColumn] {
        &self.columns
    }

    /// Base options for this listing: the default column's field as the
    /// fallback order, if one is marked.
    pub fn default_options(&self) -> PaginateOptions {
        let mut options = PaginateOptions::new();
        if let Some(column) = self.columns.iter().find(|c| c.default) {
            options.order = Some(column.field.clone());
        }
        options
    }
}

/// Maps model names to listings. Populated at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    listings: HashMap<String, Arc<Listing>>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listing under its (case-insensitive) name.
    pub fn register(&mut self, listing: Listing) -> AppResult<()> {
        let key = normalize(listing.name());
        if key.is_empty() {
            return Err(AppError::configuration("Listing name must not be empty"));
        }
        if self.listings.contains_key(&key) {
            return Err(AppError::configuration(format!(
                "Listing '{}' is already registered",
                listing.name()
            )));
        }

        info!(listing = %key, columns = listing.columns().len(), "Registering listing");
        self.listings.insert(key, Arc::new(listing));
        Ok(())
    }

    /// Looks up a listing by name.
    pub fn resolve(&self, name: &str) -> AppResult<Arc<Listing>> {
        let key = normalize(name);
        debug!(listing = %key, "Resolving listing");
        self.listings
            .get(&key)
            .cloned()
            .ok_or_else(|| AppError::model_not_found(name))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.listings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
