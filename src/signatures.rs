//! Built-in function catalog.
//!
//! Lists the aggregation and preprocess kernels the query language knows
//! about, with their accepted argument ranges. Rendering never consults
//! these tables; they back the checked constructors and the `functions`
//! command.

use crate::ast::FunctionSignature;

/// Static description of one kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    pub id: i32,
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub arg_names: &'static [&'static str],
}

impl Kernel {
    const fn new(
        id: i32,
        name: &'static str,
        min_args: usize,
        max_args: usize,
        arg_names: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            min_args,
            max_args,
            arg_names,
        }
    }

    pub fn signature(&self) -> FunctionSignature {
        FunctionSignature {
            id: self.id,
            name: self.name.to_string(),
            min_args: self.min_args,
            max_args: self.max_args,
            arg_names: self.arg_names.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// `name(arg1, arg2)` usage line.
    pub fn usage(&self) -> String {
        let mut out = format!("{}(", self.name);
        for (i, arg) in self.arg_names.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if i >= self.min_args {
                out.push('[');
                out.push_str(arg);
                out.push(']');
            } else {
                out.push_str(arg);
            }
        }
        out.push(')');
        out
    }
}

const ATTR: &[&str] = &["attribute"];

pub const AGGREGATION_KERNELS: &[Kernel] = &[
    Kernel::new(0, "count", 0, 0, &[]),
    Kernel::new(1, "sum", 1, 1, ATTR),
    Kernel::new(2, "scale", 2, 2, &["attribute", "factor"]),
    Kernel::new(3, "min", 1, 1, ATTR),
    Kernel::new(4, "max", 1, 1, ATTR),
    Kernel::new(5, "avg", 1, 1, ATTR),
    Kernel::new(6, "ratio", 2, 3, &["numerator", "denominator", "scale"]),
    Kernel::new(7, "percent_total", 1, 1, ATTR),
    Kernel::new(8, "inclusive_sum", 1, 1, ATTR),
    Kernel::new(9, "inclusive_scale", 2, 2, &["attribute", "factor"]),
    Kernel::new(10, "inclusive_ratio", 2, 3, &["numerator", "denominator", "scale"]),
    Kernel::new(11, "inclusive_percent_total", 1, 1, ATTR),
    Kernel::new(12, "any", 1, 1, ATTR),
    Kernel::new(13, "variance", 1, 1, ATTR),
    Kernel::new(14, "histogram", 1, 4, &["attribute", "bins", "min", "max"]),
];

pub const PREPROCESS_KERNELS: &[Kernel] = &[
    Kernel::new(0, "ratio", 2, 3, &["numerator", "denominator", "scale"]),
    Kernel::new(1, "scale", 2, 2, &["attribute", "factor"]),
    Kernel::new(2, "truncate", 1, 2, &["attribute", "factor"]),
    Kernel::new(3, "first", 1, 8, &["attribute"]),
    Kernel::new(4, "sum", 1, 8, &["attribute"]),
    Kernel::new(5, "div", 2, 2, &["attribute", "divisor"]),
    Kernel::new(6, "leaf", 0, 1, &["attribute"]),
];

pub fn find_aggregation(name: &str) -> Option<&'static Kernel> {
    AGGREGATION_KERNELS.iter().find(|k| k.name == name)
}

pub fn find_preprocess(name: &str) -> Option<&'static Kernel> {
    PREPROCESS_KERNELS.iter().find(|k| k.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(find_aggregation("sum").map(|k| k.min_args), Some(1));
        assert_eq!(find_preprocess("truncate").map(|k| k.max_args), Some(2));
        assert!(find_aggregation("median").is_none());
    }

    #[test]
    fn test_ids_are_positions() {
        for (i, k) in AGGREGATION_KERNELS.iter().enumerate() {
            assert_eq!(k.id as usize, i);
        }
        for (i, k) in PREPROCESS_KERNELS.iter().enumerate() {
            assert_eq!(k.id as usize, i);
        }
    }

    #[test]
    fn test_usage() {
        assert_eq!(find_aggregation("count").map(Kernel::usage).as_deref(), Some("count()"));
        assert_eq!(
            find_aggregation("ratio").map(Kernel::usage).as_deref(),
            Some("ratio(numerator, denominator, [scale])")
        );
    }

    #[test]
    fn test_signature_carries_name() {
        let sig = find_aggregation("avg").map(Kernel::signature);
        assert_eq!(sig.map(|s| s.name), Some("avg".to_string()));
    }
}
