//! In-memory [`PaginatedSource`] over JSON rows.
//!
//! Applies the order clause field by field and slices out the requested
//! page. Meant for demos and tests; real deployments paginate in their
//! database.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;
use crate::traits::PaginatedSource;
use crate::types::pagination::{PageResponse, PaginateOptions};
use crate::types::sorting::{SortDirection, SortSpec};

/// A fixed set of JSON objects.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Value>,
}

impl MemorySource {
    /// Wrap the given rows, kept in insertion order until sorted.
    pub fn new(rows: Vec<Value>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl PaginatedSource for MemorySource {
    async fn paginate(&self, options: &PaginateOptions) -> AppResult<PageResponse<Value>> {
        let mut rows = self.rows.clone();
        if let Some(order) = options.order.as_deref() {
            let spec = SortSpec::parse(order);
            rows.sort_by(|a, b| compare_rows(a, b, &spec));
        }

        let request = options.page_request();
        let total = rows.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let items = rows.into_iter().skip(offset).take(limit).collect();

        Ok(PageResponse::new(items, request.page, request.page_size, total))
    }
}

/// Unknown fields compare equal, so a bogus order clause leaves the
/// insertion order untouched.
fn compare_rows(a: &Value, b: &Value, spec: &SortSpec) -> Ordering {
    for field in spec.fields() {
        let ordering = compare_values(a.get(&field.field), b.get(&field.field));
        let ordering = match field.effective_direction() {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

// Missing and null values sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> MemorySource {
        MemorySource::new(vec![
            json!({ "login": "carol", "last_name": "Smith", "first_name": "Carol", "age": 41 }),
            json!({ "login": "ann", "last_name": "Smith", "first_name": "Ann", "age": 29 }),
            json!({ "login": "bob", "last_name": "Jones", "first_name": "Bob" }),
        ])
    }

    fn logins(page: &PageResponse<Value>) -> Vec<&str> {
        page.items
            .iter()
            .map(|row| row["login"].as_str().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn test_sorts_by_order_clause() {
        let source = users();
        let page = source
            .paginate(&PaginateOptions::new().with_order("login DESC"))
            .await
            .expect("paginate");
        assert_eq!(logins(&page), vec!["carol", "bob", "ann"]);
    }

    #[tokio::test]
    async fn test_multi_field_order() {
        let source = users();
        let page = source
            .paginate(&PaginateOptions::new().with_order("last_name DESC, first_name"))
            .await
            .expect("paginate");
        assert_eq!(logins(&page), vec!["ann", "carol", "bob"]);
    }

    #[tokio::test]
    async fn test_missing_values_sort_first() {
        let source = users();
        let page = source
            .paginate(&PaginateOptions::new().with_order("age"))
            .await
            .expect("paginate");
        assert_eq!(logins(&page), vec!["bob", "ann", "carol"]);
    }

    #[tokio::test]
    async fn test_unknown_field_keeps_insertion_order() {
        let source = users();
        let page = source
            .paginate(&PaginateOptions::new().with_order("nope sideways"))
            .await
            .expect("paginate");
        assert_eq!(logins(&page), vec!["carol", "ann", "bob"]);
    }

    #[tokio::test]
    async fn test_slices_requested_page() {
        let source = users();
        let options = PaginateOptions::new()
            .with_order("login")
            .with_page(2)
            .with_per_page(2);
        let page = source.paginate(&options).await.expect("paginate");
        assert_eq!(logins(&page), vec!["carol"]);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let source = users();
        let options = PaginateOptions::new().with_page(1_000_000_000_000_000_000);
        let page = source.paginate(&options).await.expect("paginate");
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 3);
        assert_eq!(page.page, 1_000_000_000_000_000_000);
        assert!(!page.has_next);
    }
}
