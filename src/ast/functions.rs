use serde::{Deserialize, Serialize};

use crate::ast::Condition;
use crate::error::{SpecError, SpecResult};
use crate::signatures;

/// Descriptor of a query-language function (aggregation or preprocess kernel).
///
/// Only `name` takes part in rendering. The remaining fields describe the
/// accepted argument range for tools that want to display or check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Kernel id within its catalog, -1 for ad-hoc signatures
    #[serde(default = "adhoc_id")]
    pub id: i32,
    /// Function name as written in the query text
    pub name: String,
    #[serde(default)]
    pub min_args: usize,
    #[serde(default)]
    pub max_args: usize,
    /// Argument names, for display
    #[serde(default)]
    pub arg_names: Vec<String>,
}

fn adhoc_id() -> i32 {
    -1
}

impl Default for FunctionSignature {
    fn default() -> Self {
        Self::named("")
    }
}

impl FunctionSignature {
    /// A signature known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: adhoc_id(),
            name: name.into(),
            min_args: 0,
            max_args: 0,
            arg_names: Vec::new(),
        }
    }
}

/// One reduction function applied to named attributes: `name(args…)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregationOp {
    pub op: FunctionSignature,
    #[serde(default)]
    pub args: Vec<String>,
}

impl AggregationOp {
    pub fn new(op: FunctionSignature, args: Vec<String>) -> Self {
        Self { op, args }
    }

    /// Resolve `name` in the aggregation catalog.
    pub fn by_name<S: Into<String>>(
        name: &str,
        args: impl IntoIterator<Item = S>,
    ) -> SpecResult<Self> {
        let op = signatures::find_aggregation(name)
            .map(|k| k.signature())
            .ok_or_else(|| SpecError::UnknownFunction(name.to_string()))?;
        Ok(Self::new(op, args.into_iter().map(Into::into).collect()))
    }

    pub fn name(&self) -> &str {
        &self.op.name
    }
}

impl std::fmt::Display for AggregationOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::fmt::format_aggregation_op(f, self).map(|_| ())
    }
}

/// A derived attribute computed before aggregation: `target=name(args…) [if cond]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreprocessSpec {
    /// Name of the attribute being computed
    pub target: String,
    pub op: AggregationOp,
    /// Guard; `op == None` means unconditional
    #[serde(default)]
    pub cond: Condition,
}

impl PreprocessSpec {
    pub fn new(target: impl Into<String>, op: AggregationOp, cond: Condition) -> Self {
        Self {
            target: target.into(),
            op,
            cond,
        }
    }

    /// Resolve `name` in the preprocess catalog. The result is unconditional.
    pub fn by_name<S: Into<String>>(
        target: &str,
        name: &str,
        args: impl IntoIterator<Item = S>,
    ) -> SpecResult<Self> {
        let op = signatures::find_preprocess(name)
            .map(|k| k.signature())
            .ok_or_else(|| SpecError::UnknownFunction(name.to_string()))?;
        let op = AggregationOp::new(op, args.into_iter().map(Into::into).collect());
        Ok(Self::new(target, op, Condition::none()))
    }

    /// Attach a guard condition.
    pub fn when(mut self, cond: Condition) -> Self {
        self.cond = cond;
        self
    }

    pub fn is_conditional(&self) -> bool {
        !self.cond.is_none()
    }
}

impl std::fmt::Display for PreprocessSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::fmt::format_preprocess_op(f, self).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signature_is_adhoc() {
        let from_json: FunctionSignature = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert_eq!(FunctionSignature::default(), from_json);
        assert_eq!(AggregationOp::default().op.id, -1);
        assert_ne!(
            AggregationOp::default().op.id,
            signatures::find_aggregation("count").map_or(0, |k| k.id)
        );
    }

    #[test]
    fn test_name() {
        let op = AggregationOp::new(FunctionSignature::named("avg"), vec!["x".to_string()]);
        assert_eq!(op.name(), "avg");
    }
}
