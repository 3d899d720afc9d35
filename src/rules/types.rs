/// Rule types for line classification
use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Authored form of an indentation rule.
///
/// Built-in rules and custom rules from configuration share this shape.
/// The pattern is matched case-insensitively against the raw line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDef {
    pub id: String,
    pub pattern: String,
    #[serde(default)]
    pub increment: bool,
    #[serde(default)]
    pub decrement: bool,
    #[serde(default)]
    pub reset: bool,
    /// Id of the rule that closes the suppression region this rule opens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_region_end_id: Option<String>,
}

impl RuleDef {
    #[must_use]
    pub fn new(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            increment: false,
            decrement: false,
            reset: false,
            ignore_region_end_id: None,
        }
    }

    #[must_use]
    pub fn increment(mut self) -> Self {
        self.increment = true;
        self
    }

    #[must_use]
    pub fn decrement(mut self) -> Self {
        self.decrement = true;
        self
    }

    #[must_use]
    pub fn reset(mut self) -> Self {
        self.reset = true;
        self
    }

    #[must_use]
    pub fn ignore_until(mut self, end_id: impl Into<String>) -> Self {
        self.ignore_region_end_id = Some(end_id.into());
        self
    }
}

/// Indent contribution of a matched line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndentEffect {
    pub increment: bool,
    pub decrement: bool,
    pub reset: bool,
}

impl IndentEffect {
    /// True when the line changes nothing for the indent engine
    #[must_use]
    pub fn is_neutral(self) -> bool {
        !self.increment && !self.decrement && !self.reset
    }
}

/// Compiled indentation rule, owned by a [`Catalog`](crate::rules::Catalog).
#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    re: Regex,
    effect: IndentEffect,
    /// Catalog index of the rule closing the region this rule opens
    region_end: Option<usize>,
}

impl Rule {
    /// Compile a rule definition. Region pairing is resolved later by the catalog.
    pub(crate) fn compile(def: &RuleDef) -> Result<Self, CatalogError> {
        if def.pattern.is_empty() {
            return Err(CatalogError::EmptyPattern { id: def.id.clone() });
        }
        let re = RegexBuilder::new(&def.pattern)
            .case_insensitive(true)
            .unicode(true)
            .build()
            .map_err(|source| CatalogError::InvalidPattern {
                id: def.id.clone(),
                source,
            })?;

        Ok(Self {
            id: def.id.clone(),
            re,
            effect: IndentEffect {
                increment: def.increment,
                decrement: def.decrement,
                reset: def.reset,
            },
            region_end: None,
        })
    }

    pub(crate) fn set_region_end(&mut self, index: usize) {
        self.region_end = Some(index);
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.re.as_str()
    }

    #[must_use]
    pub fn effect(&self) -> IndentEffect {
        self.effect
    }

    #[must_use]
    pub fn increment(&self) -> bool {
        self.effect.increment
    }

    #[must_use]
    pub fn decrement(&self) -> bool {
        self.effect.decrement
    }

    #[must_use]
    pub fn reset(&self) -> bool {
        self.effect.reset
    }

    /// Catalog index of the closing rule, if this rule opens a region
    #[must_use]
    pub fn region_end(&self) -> Option<usize> {
        self.region_end
    }

    #[must_use]
    pub fn opens_region(&self) -> bool {
        self.region_end.is_some()
    }

    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.re.is_match(line)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.re.as_str() == other.re.as_str()
            && self.effect == other.effect
            && self.region_end == other.region_end
    }
}

impl Eq for Rule {}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
