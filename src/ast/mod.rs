//! In-memory model of a CalQL query specification.
//!
//! Every clause is a sum type: a list is only reachable through the variant
//! that says a list is present, so a "none" clause can never leak elements
//! into the rendered text.

pub mod builders;
pub mod clauses;
pub mod conditions;
pub mod functions;
pub mod operators;
pub mod spec;

pub use self::clauses::{
    AggregationSelection, AttributeClause, AttributeSelection, FilterSelection, FormatSpec,
    FormatterDescriptor, SortSelection, SortSpec,
};
pub use self::conditions::Condition;
pub use self::functions::{AggregationOp, FunctionSignature, PreprocessSpec};
pub use self::operators::{ConditionOp, SortOrder};
pub use self::spec::QuerySpec;
