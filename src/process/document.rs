/// Per-line classification of whole documents
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::classifier::LineClassifier;
use crate::rules::{Catalog, IndentEffect, Rule};

/// The rule a line matched, as seen by an indentation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    /// Catalog index of the rule
    pub index: usize,
    pub id: String,
    pub effect: IndentEffect,
}

impl RuleMatch {
    fn new(index: usize, rule: &Rule) -> Self {
        Self {
            index,
            id: rule.id().to_string(),
            effect: rule.effect(),
        }
    }
}

/// Outcome for one physical line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineClassification {
    /// 1-based line number
    pub line_number: usize,
    pub matched: Option<RuleMatch>,
    /// Line was swallowed by a suppression region
    pub suppressed: bool,
}

impl LineClassification {
    /// Indent contribution of this line; neutral when nothing matched
    #[must_use]
    pub fn effect(&self) -> IndentEffect {
        self.matched
            .as_ref()
            .map_or_else(IndentEffect::default, |m| m.effect)
    }
}

/// Classify every line of `text` with a fresh classifier
#[must_use]
pub fn classify_document(catalog: &Arc<Catalog>, text: &str) -> Vec<LineClassification> {
    let mut classifier = LineClassifier::new(Arc::clone(catalog));

    let result: Vec<LineClassification> = text
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let in_region = classifier.is_suppressed();
            let matched = classifier
                .classify_indexed(line)
                .map(|(index, rule)| RuleMatch::new(index, rule));
            LineClassification {
                line_number: idx + 1,
                suppressed: in_region && matched.is_none(),
                matched,
            }
        })
        .collect();

    if classifier.is_suppressed() {
        tracing::debug!("document ended inside a suppression region");
    }

    result
}

/// Classify many documents in parallel, one classifier per document.
///
/// Results are returned in input order.
#[must_use]
pub fn classify_documents<S>(catalog: &Arc<Catalog>, documents: &[S]) -> Vec<Vec<LineClassification>>
where
    S: AsRef<str> + Sync,
{
    documents
        .par_iter()
        .map(|doc| classify_document(catalog, doc.as_ref()))
        .collect()
}
