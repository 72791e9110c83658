//! Builders for aggregation and preprocess operations.
//!
//! These take the operator name verbatim and do not consult the catalog;
//! use [`AggregationOp::by_name`] for a checked lookup.

use crate::ast::{AggregationOp, Condition, FunctionSignature, PreprocessSpec, SortOrder, SortSpec};

fn args_vec<S: Into<String>>(args: impl IntoIterator<Item = S>) -> Vec<String> {
    args.into_iter().map(Into::into).collect()
}

/// `name(args…)`
pub fn agg<S: Into<String>>(name: &str, args: impl IntoIterator<Item = S>) -> AggregationOp {
    AggregationOp::new(FunctionSignature::named(name), args_vec(args))
}

/// `count()`
pub fn count() -> AggregationOp {
    agg("count", std::iter::empty::<&str>())
}

/// `sum(attr)`
pub fn sum(attr: &str) -> AggregationOp {
    agg("sum", [attr])
}

/// `min(attr)`
pub fn min(attr: &str) -> AggregationOp {
    agg("min", [attr])
}

/// `max(attr)`
pub fn max(attr: &str) -> AggregationOp {
    agg("max", [attr])
}

/// `avg(attr)`
pub fn avg(attr: &str) -> AggregationOp {
    agg("avg", [attr])
}

/// `target=name(args…)`, unconditional
pub fn derive<S: Into<String>>(
    target: &str,
    name: &str,
    args: impl IntoIterator<Item = S>,
) -> PreprocessSpec {
    PreprocessSpec::new(target, agg(name, args), Condition::none())
}

/// Ascending sort on `attr`
pub fn asc(attr: &str) -> SortSpec {
    SortSpec::new(attr, SortOrder::Ascending)
}

/// Descending sort on `attr`
pub fn desc(attr: &str) -> SortSpec {
    SortSpec::new(attr, SortOrder::Descending)
}
