//! advpl-indent - Indentation rule classifier for AdvPL/TLPP source lines
//!
//! Classifies one line at a time into the first matching indentation rule of
//! an ordered catalog, tracking block comment regions along the way.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod memory;
pub mod process;
pub mod region;
pub mod rules;

// Re-export commonly used types
pub use classifier::LineClassifier;
pub use config::Config;
pub use error::{CatalogError, RegionError, Result};
pub use memory::ClassificationMemory;
pub use process::{classify_document, classify_documents, LineClassification, RuleMatch};
pub use region::{RegionState, RegionTracker};
pub use rules::{Catalog, IndentEffect, Rule, RuleDef};
