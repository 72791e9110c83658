use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ast::{AggregationOp, Condition, SortOrder};

/// The `aggregate` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationSelection {
    None,
    /// Let the consumer pick its default aggregation
    #[default]
    Default,
    List(Vec<AggregationOp>),
}

/// Attribute list of a `select` or `group by` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeSelection {
    #[default]
    Default,
    None,
    All,
    List(Vec<String>),
}

/// A `select` or `group by` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeClause {
    #[serde(default)]
    pub selection: AttributeSelection,
    /// Put the implicit `path` pseudo-attribute first
    #[serde(default)]
    pub use_path: bool,
}

impl AttributeClause {
    pub fn all() -> Self {
        Self {
            selection: AttributeSelection::All,
            use_path: false,
        }
    }

    pub fn list<S: Into<String>>(attrs: impl IntoIterator<Item = S>) -> Self {
        Self {
            selection: AttributeSelection::List(attrs.into_iter().map(Into::into).collect()),
            use_path: false,
        }
    }

    pub fn with_path(mut self) -> Self {
        self.use_path = true;
        self
    }
}

/// The `where` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterSelection {
    #[default]
    None,
    All,
    List(Vec<Condition>),
}

/// One `order by` entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub attribute: String,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(attribute: impl Into<String>, order: SortOrder) -> Self {
        Self {
            attribute: attribute.into(),
            order,
        }
    }
}

impl std::fmt::Display for SortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.attribute, self.order)
    }
}

/// The `order by` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortSelection {
    #[default]
    None,
    Default,
    List(Vec<SortSpec>),
}

/// Names the output formatter of a `format` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatterDescriptor {
    pub name: String,
}

/// The `format` clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSpec {
    #[default]
    Default,
    User {
        formatter: FormatterDescriptor,
        /// Keyword arguments, rendered in key order
        #[serde(default)]
        kwargs: BTreeMap<String, String>,
    },
}

impl FormatSpec {
    pub fn user(name: impl Into<String>) -> Self {
        FormatSpec::User {
            formatter: FormatterDescriptor { name: name.into() },
            kwargs: BTreeMap::new(),
        }
    }

    /// Add a keyword argument. Turns a `Default` format into a `User` one
    /// with an empty formatter name.
    pub fn arg(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (formatter, mut kwargs) = match self {
            FormatSpec::User { formatter, kwargs } => (formatter, kwargs),
            FormatSpec::Default => (FormatterDescriptor::default(), BTreeMap::new()),
        };
        kwargs.insert(key.into(), value.into());
        FormatSpec::User { formatter, kwargs }
    }
}
