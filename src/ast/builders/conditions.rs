//! Condition builders for `where` clauses and preprocess guards.

use crate::ast::{Condition, ConditionOp};

/// Helper to create a condition
fn make_condition(attr: &str, op: ConditionOp, value: &str) -> Condition {
    Condition::new(attr, op, value)
}

/// Attribute is present (`attr`)
pub fn exist(attr: &str) -> Condition {
    make_condition(attr, ConditionOp::Exist, "")
}

/// Attribute is absent (`not attr`)
pub fn not_exist(attr: &str) -> Condition {
    make_condition(attr, ConditionOp::NotExist, "")
}

/// Equality (`attr=value`)
pub fn eq(attr: &str, value: &str) -> Condition {
    make_condition(attr, ConditionOp::Equal, value)
}

/// Inequality (`not attr=value`)
pub fn ne(attr: &str, value: &str) -> Condition {
    make_condition(attr, ConditionOp::NotEqual, value)
}

/// Less than (`attr<value`)
pub fn lt(attr: &str, value: &str) -> Condition {
    make_condition(attr, ConditionOp::LessThan, value)
}

/// Greater than (`attr>value`)
pub fn gt(attr: &str, value: &str) -> Condition {
    make_condition(attr, ConditionOp::GreaterThan, value)
}

/// Less than or equal (`not attr>value`)
pub fn le(attr: &str, value: &str) -> Condition {
    make_condition(attr, ConditionOp::LessOrEqual, value)
}

/// Greater than or equal (`not attr<value`)
pub fn ge(attr: &str, value: &str) -> Condition {
    make_condition(attr, ConditionOp::GreaterOrEqual, value)
}
