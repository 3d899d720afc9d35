//! Indentation rules and the ordered rule catalog.
//!
//! - [`RuleDef`]: Authored rule shape, shared by built-ins and custom configuration
//! - [`Rule`]: Compiled rule with its [`IndentEffect`] and resolved region pairing
//! - [`Catalog`]: Built-in rules followed by custom rules, matched first-wins
//! - [`builtin`]: The built-in AdvPL/TLPP rule table

pub mod builtin;
pub mod catalog;
pub mod types;

pub use builtin::{builtin_count, builtin_rules};
pub use catalog::Catalog;
pub use types::{IndentEffect, Rule, RuleDef};
