//! Request query parameters.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// The query parameters of the current request, in their original order.
///
/// Lookups return the last occurrence of a name, so `?sort=a&sort=b`
/// reads as `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    pub fn from_query(query: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Append a parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// Value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of `name` when present and not blank.
    pub fn get_non_blank(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    /// All parameters in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build `path?query` from every current parameter, with `name` set to
    /// `value`. Other parameters keep their order; `name` replaces its
    /// first occurrence, or is appended when absent.
    pub fn url_with(&self, path: &str, name: &str, value: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let mut replaced = false;
        for (key, current) in self.iter() {
            if key != name {
                serializer.append_pair(key, current);
            } else if !replaced {
                serializer.append_pair(key, value);
                replaced = true;
            }
        }
        if !replaced {
            serializer.append_pair(name, value);
        }
        format!("{path}?{}", serializer.finish())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_decodes_values() {
        let params = RequestParams::from_query("?sort=last_name%2C+first_name&page=2");
        assert_eq!(params.get("sort"), Some("last_name, first_name"));
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let params = RequestParams::from_query("sort=a&sort=b");
        assert_eq!(params.get("sort"), Some("b"));
    }

    #[test]
    fn test_blank_values() {
        let params = RequestParams::from_query("sort=&page=+");
        assert_eq!(params.get("sort"), Some(""));
        assert_eq!(params.get_non_blank("sort"), None);
        assert_eq!(params.get_non_blank("page"), None);
    }

    #[test]
    fn test_url_with_replaces_in_place() {
        let params = RequestParams::from_query("q=ann&sort=login&page=3&sort=old");
        assert_eq!(
            params.url_with("/users", "sort", "login DESC"),
            "/users?q=ann&sort=login+DESC&page=3"
        );
    }

    #[test]
    fn test_url_with_appends_missing_parameter() {
        let params: RequestParams = [("q", "ann")].into_iter().collect();
        assert_eq!(
            params.url_with("/users", "sort", "last_name, first_name"),
            "/users?q=ann&sort=last_name%2C+first_name"
        );
    }
}
