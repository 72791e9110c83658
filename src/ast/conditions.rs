use serde::{Deserialize, Serialize};

use crate::ast::ConditionOp;

/// A single filter or guard condition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    /// Attribute the condition tests
    pub attr_name: String,
    /// Comparison operator
    #[serde(default)]
    pub op: ConditionOp,
    /// Value to compare against; ignored for Exist, NotExist and None
    #[serde(default)]
    pub value: String,
}

impl Condition {
    pub fn new(attr_name: impl Into<String>, op: ConditionOp, value: impl Into<String>) -> Self {
        Self {
            attr_name: attr_name.into(),
            op,
            value: value.into(),
        }
    }

    /// The empty condition: `op == None`, renders nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.op == ConditionOp::None
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::fmt::format_condition(f, self).map(|_| ())
    }
}
