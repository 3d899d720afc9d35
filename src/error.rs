//! Error types and result aliases for advpl-indent.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used at the configuration edge
//! - [`CatalogError`]: Raised while building a rule catalog; nothing is usable after it
//! - [`RegionError`]: Misuse of the suppression region tracker

use anyhow::Result as AnyhowResult;
use thiserror::Error;

pub type Result<T> = AnyhowResult<T>;

/// Configuration errors detected while compiling a rule catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A rule pattern failed to compile
    #[error("rule '{id}' has an invalid pattern: {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    /// An empty pattern would match every non-blank line
    #[error("rule '{id}' has an empty pattern")]
    EmptyPattern { id: String },

    /// A rule names a region end that no rule in the catalog carries
    #[error("rule '{id}' closes its region at unknown rule '{end_id}'")]
    UnknownRegionEnd { id: String, end_id: String },
}

/// Logic errors from driving the region tracker directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Only one suppression region may be active at a time
    #[error("cannot open region at rule #{requested}: region opened by rule #{active} is still active")]
    AlreadyInRegion { active: usize, requested: usize },
}
