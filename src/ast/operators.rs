use serde::{Deserialize, Serialize};

/// Comparison operator of a filter or guard condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOp {
    /// No condition (unconditional guard)
    #[default]
    None,
    /// Attribute is present
    Exist,
    /// Attribute is absent
    NotExist,
    /// attr=value
    Equal,
    /// not attr=value
    NotEqual,
    /// attr<value
    LessThan,
    /// attr>value
    GreaterThan,
    /// attr<=value, written as `not attr>value`
    LessOrEqual,
    /// attr>=value, written as `not attr<value`
    GreaterOrEqual,
}

impl ConditionOp {
    /// Returns true for operators rendered with a leading ` not `.
    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            ConditionOp::NotExist
                | ConditionOp::NotEqual
                | ConditionOp::LessOrEqual
                | ConditionOp::GreaterOrEqual
        )
    }

    /// The infix token between attribute and value, if any.
    ///
    /// The inclusive comparisons have no token of their own in the grammar;
    /// they reuse the opposite strict token under negation.
    pub fn symbol(&self) -> Option<char> {
        match self {
            ConditionOp::Equal | ConditionOp::NotEqual => Some('='),
            ConditionOp::LessThan | ConditionOp::GreaterOrEqual => Some('<'),
            ConditionOp::GreaterThan | ConditionOp::LessOrEqual => Some('>'),
            ConditionOp::None | ConditionOp::Exist | ConditionOp::NotExist => None,
        }
    }
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Keyword appended after the sort attribute.
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_ops_reuse_opposite_symbol() {
        assert_eq!(ConditionOp::LessOrEqual.symbol(), Some('>'));
        assert_eq!(ConditionOp::GreaterOrEqual.symbol(), Some('<'));
        assert!(ConditionOp::LessOrEqual.is_negated());
        assert!(!ConditionOp::LessThan.is_negated());
    }

    #[test]
    fn test_sort_order_default_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Descending.to_string(), "DESC");
    }
}
