//! Demo listings served by the binary.

use std::sync::Arc;

use serde_json::json;

use listsort_core::error::AppError;
use listsort_core::memory::MemorySource;
use listsort_core::registry::{Listing, ModelRegistry, SortColumn};

/// Registry with a `users` listing over a handful of in-memory rows.
pub fn demo_registry() -> Result<ModelRegistry, AppError> {
    let users = MemorySource::new(vec![
        json!({ "login": "avasquez", "first_name": "Ana", "last_name": "Vasquez", "country": "Chile", "updated_at": "2026-09-30T08:12:00Z" }),
        json!({ "login": "bkowalski", "first_name": "Bartek", "last_name": "Kowalski", "country": "Poland", "updated_at": "2026-10-02T17:45:00Z" }),
        json!({ "login": "cnakamura", "first_name": "Chie", "last_name": "Nakamura", "country": "Japan", "updated_at": "2026-08-14T23:01:00Z" }),
        json!({ "login": "dokafor", "first_name": "Dayo", "last_name": "Okafor", "country": "Nigeria", "updated_at": "2026-10-11T06:30:00Z" }),
        json!({ "login": "ekowalski", "first_name": "Ewa", "last_name": "Kowalski", "country": "Poland", "updated_at": "2026-07-21T12:00:00Z" }),
    ]);

    let mut registry = ModelRegistry::new();
    registry.register(
        Listing::new("users", Arc::new(users))
            .column(SortColumn::new("Login", "login").as_default())
            .column(SortColumn::new("Name", "last_name, first_name"))
            .column(SortColumn::new("Country", "country"))
            .column(SortColumn::new("Updated", "updated_at DESC")),
    )?;
    Ok(registry)
}
