//! Document-level classification.
//!
//! Runs every line of a document through a fresh [`LineClassifier`](crate::classifier::LineClassifier)
//! and collects one [`LineClassification`] per line, ready for an indentation
//! engine to consume. Many documents can be classified in parallel; each gets
//! its own classifier while sharing one immutable catalog.
//!
//! The main entry points are [`classify_document`] and [`classify_documents`].

pub mod document;

pub use document::{classify_document, classify_documents, LineClassification, RuleMatch};
