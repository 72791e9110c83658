//! Builder helpers for constructing specifications in code.
//!
//! ```
//! use calql::ast::builders::*;
//!
//! let cond = eq("function", "main");
//! assert_eq!(cond.to_string(), "function=main");
//! ```

mod conditions;
mod functions;

pub use conditions::*;
pub use functions::*;
