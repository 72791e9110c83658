//! Configuration for the `calql` tool.
//!
//! Looked up in order: an explicit path, `./calql.toml`, then
//! `<config dir>/calql/config.toml`. A missing file means defaults.
//!
//! ```toml
//! [render]
//! color = true
//! newline = true
//!
//! [aliases]
//! "time.duration" = "Time"
//!
//! [units]
//! "time.duration" = "sec"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ast::QuerySpec;
use crate::error::{SpecError, SpecResult};

pub const LOCAL_CONFIG: &str = "calql.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    /// Default select aliases
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,

    /// Default select units
    #[serde(default)]
    pub units: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default = "default_true")]
    pub newline: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            newline: default_true(),
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str) -> SpecResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from `explicit` if given (it must exist), else from the first
    /// default location that exists.
    pub fn load(explicit: Option<&Path>) -> SpecResult<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SpecError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }
        for path in default_paths() {
            if path.exists() {
                return Self::load_file(&path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> SpecResult<Self> {
        debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Fill the spec's alias and unit tables from the configured defaults.
    /// Entries already in the spec are kept.
    pub fn apply(&self, spec: &mut QuerySpec) {
        for (attr, alias) in &self.aliases {
            spec.aliases
                .entry(attr.clone())
                .or_insert_with(|| alias.clone());
        }
        for (attr, unit) in &self.units {
            spec.units.entry(attr.clone()).or_insert_with(|| unit.clone());
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("calql").join("config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.render.color);
        assert!(config.render.newline);
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_apply_keeps_spec_entries() {
        let config = Config::from_toml_str(
            r#"
            [aliases]
            a = "from_config"
            b = "bee"

            [units]
            a = "sec"
            "#,
        )
        .unwrap();
        let mut spec = QuerySpec::new().with_alias("a", "from_spec");
        config.apply(&mut spec);
        assert_eq!(spec.aliases.get("a").map(String::as_str), Some("from_spec"));
        assert_eq!(spec.aliases.get("b").map(String::as_str), Some("bee"));
        assert_eq!(spec.units.get("a").map(String::as_str), Some("sec"));
    }

    #[test]
    fn test_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/calql.toml"))).unwrap_err();
        assert!(matches!(err, SpecError::Config(_)));
    }
}
