use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ast::{
    AggregationOp, AggregationSelection, AttributeClause, Condition, FilterSelection, FormatSpec,
    PreprocessSpec, SortSelection, SortSpec,
};

/// A complete query specification.
///
/// The default value has every clause absent and renders as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    /// Derived attributes (`let …`), in evaluation order
    pub preprocess_ops: Vec<PreprocessSpec>,
    pub aggregate: AggregationSelection,
    pub select: AttributeClause,
    pub groupby: AttributeClause,
    pub filter: FilterSelection,
    pub sort: SortSelection,
    pub format: FormatSpec,
    /// attribute -> display alias, used by the select clause
    pub aliases: BTreeMap<String, String>,
    /// attribute -> unit string, used by the select clause
    pub units: BTreeMap<String, String>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preprocess(mut self, op: PreprocessSpec) -> Self {
        self.preprocess_ops.push(op);
        self
    }

    /// Append to the aggregation list, switching the clause to a list.
    pub fn with_aggregate(mut self, op: AggregationOp) -> Self {
        match &mut self.aggregate {
            AggregationSelection::List(list) => list.push(op),
            other => *other = AggregationSelection::List(vec![op]),
        }
        self
    }

    pub fn with_select(mut self, select: AttributeClause) -> Self {
        self.select = select;
        self
    }

    pub fn with_groupby(mut self, groupby: AttributeClause) -> Self {
        self.groupby = groupby;
        self
    }

    /// Append to the filter list, switching the clause to a list.
    pub fn with_filter(mut self, cond: Condition) -> Self {
        match &mut self.filter {
            FilterSelection::List(list) => list.push(cond),
            other => *other = FilterSelection::List(vec![cond]),
        }
        self
    }

    /// Append to the sort list, switching the clause to a list.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        match &mut self.sort {
            SortSelection::List(list) => list.push(sort),
            other => *other = SortSelection::List(vec![sort]),
        }
        self
    }

    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.format = format;
        self
    }

    pub fn with_alias(mut self, attr: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(attr.into(), alias.into());
        self
    }

    pub fn with_unit(mut self, attr: impl Into<String>, unit: impl Into<String>) -> Self {
        self.units.insert(attr.into(), unit.into());
        self
    }
}

impl std::fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::fmt::format_spec(f, self).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::builders::*;

    #[test]
    fn test_with_filter_replaces_none_selection() {
        let spec = QuerySpec::new()
            .with_filter(exist("function"))
            .with_filter(eq("loop", "main"));
        assert_eq!(
            spec.filter,
            FilterSelection::List(vec![exist("function"), eq("loop", "main")])
        );
    }

    #[test]
    fn test_with_aggregate_replaces_default_selection() {
        let spec = QuerySpec::new().with_aggregate(count());
        assert_eq!(spec.aggregate, AggregationSelection::List(vec![count()]));
    }

    #[test]
    fn test_default_spec_has_no_lists() {
        let spec = QuerySpec::default();
        assert!(spec.preprocess_ops.is_empty());
        assert_eq!(spec.aggregate, AggregationSelection::Default);
        assert_eq!(spec.sort, SortSelection::None);
        assert_eq!(spec.format, FormatSpec::Default);
    }
}
