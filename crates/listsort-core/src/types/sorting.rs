//! Sorting types: directions, sort fields and comma-separated sort specs.
//!
//! A sort spec travels as a single string such as
//! `"last_name, first_name DESC"`. [`SortSpec::parse`] tokenizes it into an
//! ordered list of [`SortField`]s; matching and reversal work on that form
//! and only [`Display`](std::fmt::Display) turns it back into a string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Asc
    }
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parse an `ASC` / `DESC` keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("ASC") {
            Some(Self::Asc)
        } else if keyword.eq_ignore_ascii_case("DESC") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A single `field [ASC|DESC]` component of a sort spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Column or field name to sort by.
    pub field: String,
    /// Explicit direction; `None` means the implicit ascending order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: Option<SortDirection>) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create a sort field with no explicit direction.
    pub fn plain(field: impl Into<String>) -> Self {
        Self::new(field, None)
    }

    /// Create an explicitly ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Some(SortDirection::Asc))
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Some(SortDirection::Desc))
    }

    /// Tokenize one component such as `"updated_at desc"`.
    ///
    /// The trailing word is taken as the direction only when it is an
    /// `ASC`/`DESC` keyword and something precedes it; anything else stays
    /// part of the field name so malformed input never matches a column.
    pub fn parse(component: &str) -> Self {
        let trimmed = component.trim();
        if let Some(idx) = trimmed.rfind(char::is_whitespace) {
            let head = trimmed[..idx].trim_end();
            if let Some(direction) = SortDirection::from_keyword(trimmed[idx..].trim_start()) {
                return Self::new(head, Some(direction));
            }
        }
        Self::plain(trimmed)
    }

    /// Direction in effect, treating an unspecified direction as ascending.
    pub fn effective_direction(&self) -> SortDirection {
        self.direction.unwrap_or_default()
    }

    /// Flip the direction. Ascending (explicit or implicit) becomes `DESC`;
    /// `DESC` loses its suffix and falls back to the implicit ascending order.
    pub fn reversed(&self) -> Self {
        let direction = match self.effective_direction().reversed() {
            SortDirection::Desc => Some(SortDirection::Desc),
            SortDirection::Asc => None,
        };
        Self::new(self.field.clone(), direction)
    }

    /// Whether both components sort on the same field, ignoring case and
    /// direction.
    pub fn same_field(&self, other: &SortField) -> bool {
        self.field.eq_ignore_ascii_case(&other.field)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(direction) => write!(f, "{} {}", self.field, direction.as_sql()),
            None => f.write_str(&self.field),
        }
    }
}

/// An ordered, comma-separated list of sort fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SortSpec {
    fields: Vec<SortField>,
}

impl SortSpec {
    /// Build a spec from already tokenized fields.
    pub fn new(fields: Vec<SortField>) -> Self {
        Self { fields }
    }

    /// Tokenize a comma-separated spec. Whitespace around commas is
    /// ignored; commas are the only delimiter.
    pub fn parse(spec: &str) -> Self {
        Self {
            fields: spec.split(',').map(SortField::parse).collect(),
        }
    }

    /// The fields in sort order.
    pub fn fields(&self) -> &[SortField] {
        &self.fields
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the spec has no components.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reverse every component independently, keeping field order.
    pub fn reversed(&self) -> Self {
        Self {
            fields: self.fields.iter().map(SortField::reversed).collect(),
        }
    }

    /// Drop explicit `ASC` keywords, since ascending is implicit.
    pub fn canonical(mut self) -> Self {
        for field in &mut self.fields {
            if field.direction == Some(SortDirection::Asc) {
                field.direction = None;
            }
        }
        self
    }

    /// Whether `self` (the sort in effect) sorts on exactly the fields of
    /// `candidate`, in the same order, whatever their directions.
    ///
    /// Specs with a different number of components never match.
    pub fn matches(&self, candidate: &SortSpec) -> bool {
        self.len() == candidate.len()
            && self
                .fields
                .iter()
                .zip(&candidate.fields)
                .all(|(current, wanted)| current.same_field(wanted))
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl From<String> for SortSpec {
    fn from(spec: String) -> Self {
        Self::parse(&spec)
    }
}

impl From<SortSpec> for String {
    fn from(spec: SortSpec) -> Self {
        spec.to_string()
    }
}
