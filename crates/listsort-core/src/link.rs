//! View-side sort links.
//!
//! A sort link points at the current URL with the sort parameter replaced.
//! When the link's field is the sort in effect, following it reverses the
//! order and the link carries a `current-sort asc|desc` class describing
//! the present state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::codec::SortCodec;
use crate::result::AppResult;
use crate::types::params::RequestParams;
use crate::types::sorting::{SortDirection, SortSpec};

/// Class added to the link of the active sort.
const CURRENT_SORT_CLASS: &str = "current-sort";

/// Options for a single sort link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// The link represents the implicit sort order when none is requested.
    pub default: bool,
    /// Extra CSS classes.
    pub class: Option<String>,
    /// Other HTML attributes, passed through to the renderer.
    pub attributes: BTreeMap<String, String>,
}

impl LinkOptions {
    /// No options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the link as the implicit sort order.
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Add a CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(join_classes(self.class.take(), &class.into()));
        self
    }

    /// Add an HTML attribute. `class` is folded into [`class`](Self::class).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        if name == "class" {
            return self.class(value);
        }
        self.attributes.insert(name, value.into());
        self
    }
}

/// A fully resolved sort link, ready for a [`LinkRenderer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortLink {
    /// Link text.
    pub label: String,
    /// Target URL with the sort parameter set.
    pub href: String,
    /// Decoded sort spec the link switches to.
    pub sort: String,
    /// Whether the link's field is the sort in effect.
    pub current: bool,
    /// Direction currently in effect, for the current link only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    /// CSS classes, including `current-sort asc|desc` for the current link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Remaining HTML attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

/// Turns a [`SortLink`] into markup or any other output.
///
/// Escaping is the renderer's job.
pub trait LinkRenderer {
    /// Rendered form.
    type Output;

    /// Render one link.
    fn render(&self, link: &SortLink) -> Self::Output;
}

impl<F, T> LinkRenderer for F
where
    F: Fn(&SortLink) -> T,
{
    type Output = T;

    fn render(&self, link: &SortLink) -> T {
        self(link)
    }
}

/// Builds the sort links of one request.
///
/// The request's sort token is decoded once, on construction.
#[derive(Debug, Clone)]
pub struct SortLinkBuilder<'a> {
    codec: &'a SortCodec,
    params: &'a RequestParams,
    path: &'a str,
    token: Option<String>,
    current: Option<SortSpec>,
}

impl<'a> SortLinkBuilder<'a> {
    /// Builder for links on `path`, keeping every parameter of `params`.
    ///
    /// Fails only when the sort token is undecodable and the codec is
    /// configured to reject such tokens.
    pub fn new(codec: &'a SortCodec, params: &'a RequestParams, path: &'a str) -> AppResult<Self> {
        let token = codec.current_sort_token(params)?;
        let current = token.as_deref().map(SortSpec::parse);
        Ok(Self {
            codec,
            params,
            path,
            token,
            current,
        })
    }

    /// The decoded sort token, verbatim, for handing to the pagination
    /// adapter.
    pub fn current_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The sort in effect for this request.
    pub fn current_sort(&self) -> Option<&SortSpec> {
        self.current.as_ref()
    }

    /// Resolve the link for a column sorting by `field_spec`.
    pub fn sort_link(&self, label: &str, field_spec: &str, options: LinkOptions) -> SortLink {
        let LinkOptions {
            default,
            class,
            attributes,
        } = options;
        let candidate = SortSpec::parse(field_spec);

        let (target, current) = match &self.current {
            Some(current) if current.matches(&candidate) => (current.reversed().to_string(), true),
            None if default => (candidate.reversed().to_string(), false),
            _ => (field_spec.to_string(), false),
        };

        // The link leads away from the present order: a DESC target means
        // the list is ascending now.
        let direction = current.then(|| {
            if target.to_ascii_uppercase().ends_with("DESC") {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            }
        });
        let class = match direction {
            Some(direction) => Some(join_classes(
                class,
                &format!("{CURRENT_SORT_CLASS} {}", state_class(direction)),
            )),
            None => class,
        };

        let href = self.params.url_with(
            self.path,
            self.codec.parameter_name(),
            &self.codec.encode(&target),
        );

        SortLink {
            label: label.to_string(),
            href,
            sort: target,
            current,
            direction,
            class,
            attributes,
        }
    }

    /// Resolve and render a link in one step.
    pub fn render<R: LinkRenderer>(
        &self,
        renderer: &R,
        label: &str,
        field_spec: &str,
        options: LinkOptions,
    ) -> R::Output {
        renderer.render(&self.sort_link(label, field_spec, options))
    }
}

fn state_class(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "asc",
        SortDirection::Desc => "desc",
    }
}

fn join_classes(existing: Option<String>, extra: &str) -> String {
    match existing {
        Some(existing) if !existing.trim().is_empty() => format!("{} {extra}", existing.trim()),
        _ => extra.to_string(),
    }
}
