//! Configuration for advpl-indent.
//!
//! The only configurable surface is an ordered list of custom rules, appended
//! after the built-in catalog. Custom rules are read from TOML as `[[rules]]`
//! tables:
//!
//! ```toml
//! [[rules]]
//! id = "begin block"
//! pattern = '^\s*begin\s+block'
//! increment = true
//!
//! [[rules]]
//! id = "end block"
//! pattern = '^\s*end\s+block'
//! decrement = true
//! ```
//!
//! Locating the file is left to the caller.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::rules::{Catalog, RuleDef};

/// Classifier configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Custom rules in precedence order, tried after every built-in rule
    #[serde(default)]
    pub rules: Vec<RuleDef>,
}

impl Config {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("invalid configuration")?;
        if let Some(msg) = config.validate() {
            anyhow::bail!("invalid configuration: {msg}");
        }
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("in {}", path.display()))
    }

    /// Validate custom rule fields that the catalog cannot check
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.id.trim().is_empty() {
                return Some(format!("custom rule #{idx} has an empty id"));
            }
            if rule.pattern.is_empty() {
                return Some(format!("custom rule '{}' has an empty pattern", rule.id));
            }
        }
        None
    }

    /// Build the effective catalog: built-ins followed by this config's rules
    ///
    /// Fails on an empty or invalid pattern, or an unresolvable region end.
    pub fn build_catalog(&self) -> std::result::Result<Catalog, CatalogError> {
        Catalog::new(self.rules.clone())
    }
}
