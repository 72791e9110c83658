//! Specification documents.
//!
//! A query specification can be written as JSON or TOML using the serde
//! shape of [`QuerySpec`]:
//!
//! ```json
//! {
//!   "aggregate": { "list": [ { "op": { "name": "sum" }, "args": ["time.duration"] } ] },
//!   "select": { "selection": { "list": ["function"] } },
//!   "sort": { "list": [ { "attribute": "function", "order": "descending" } ] }
//! }
//! ```

use std::path::Path;

use tracing::debug;

use crate::ast::QuerySpec;
use crate::error::SpecResult;

pub fn from_json_str(text: &str) -> SpecResult<QuerySpec> {
    Ok(serde_json::from_str(text)?)
}

pub fn from_toml_str(text: &str) -> SpecResult<QuerySpec> {
    Ok(toml::from_str(text)?)
}

/// Load a document, choosing the format by extension (`.toml`, else JSON).
pub fn from_path(path: impl AsRef<Path>) -> SpecResult<QuerySpec> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
    debug!(path = %path.display(), toml = is_toml, "loading query spec");
    if is_toml {
        from_toml_str(&text)
    } else {
        from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AttributeSelection, SortOrder, SortSelection};
    use crate::error::SpecError;

    #[test]
    fn test_json_minimal() {
        let spec = from_json_str(r#"{ "select": { "selection": "all" } }"#).unwrap();
        assert_eq!(spec.select.selection, AttributeSelection::All);
        assert_eq!(spec.to_string(), " select *");
    }

    #[test]
    fn test_json_empty_object_is_default() {
        let spec = from_json_str("{}").unwrap();
        assert_eq!(spec, QuerySpec::default());
    }

    #[test]
    fn test_toml_sort() {
        let spec = from_toml_str(
            r#"
            [[sort.list]]
            attribute = "time"
            order = "descending"
            "#,
        )
        .unwrap();
        match spec.sort {
            SortSelection::List(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].order, SortOrder::Descending);
            }
            other => panic!("unexpected sort clause: {:?}", other),
        }
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(from_json_str("{"), Err(SpecError::Json(_))));
    }
}
