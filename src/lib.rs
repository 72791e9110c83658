//! # calql — query specifications for performance-data reduction
//!
//! A [`QuerySpec`](ast::QuerySpec) describes how to reduce a stream of
//! attribute/value records: derived attributes, aggregation, selection,
//! grouping, filtering, sorting and output format. This crate holds that
//! model and writes it back out as CalQL text.
//!
//! ## Quick Example
//!
//! ```
//! use calql::prelude::*;
//!
//! let spec = QuerySpec::new()
//!     .with_aggregate(sum("time.duration"))
//!     .with_select(AttributeClause::list(["function"]))
//!     .with_groupby(AttributeClause::list(["function"]))
//!     .with_sort(desc("function"));
//!
//! assert_eq!(
//!     spec.to_string(),
//!     " aggregate sum(time.duration) select function group by function order by function DESC"
//! );
//! ```
//!
//! ## Clause Order
//!
//! | Clause     | Text                                  |
//! |------------|---------------------------------------|
//! | preprocess | `let t=f(a, b) if cond, …`            |
//! | aggregate  | ` aggregate f(a), …`                  |
//! | select     | ` select *`, ` select [path, ]a as x unit s, …` |
//! | group by   | ` group by [path, ]a, …`              |
//! | where      | ` where cond, …`                      |
//! | order by   | ` order by a ASC, b DESC`             |
//! | format     | ` format name(k=v, …)`                |

pub mod ast;
pub mod config;
pub mod error;
pub mod fmt;
pub mod load;
pub mod signatures;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::config::Config;
    pub use crate::error::*;
    pub use crate::fmt::Formatter;
}

/// Render a specification as CalQL text.
///
/// # Example
///
/// ```
/// use calql::prelude::*;
///
/// assert_eq!(calql::to_query_string(&QuerySpec::default()), "");
/// ```
pub fn to_query_string(spec: &ast::QuerySpec) -> String {
    spec.to_string()
}
