//! Last successful classification.

use crate::rules::Rule;

/// Holds the most recent matched rule and the line it matched.
///
/// Only successful matches overwrite it. Lines without a match, including
/// lines swallowed by a suppression region, leave it as it was.
#[derive(Debug, Clone, Default)]
pub struct ClassificationMemory {
    last: Option<(Rule, String)>,
}

impl ClassificationMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, rule: &Rule, line: &str) {
        self.last = Some((rule.clone(), line.to_string()));
    }

    #[must_use]
    pub fn last(&self) -> Option<(&Rule, &str)> {
        self.last
            .as_ref()
            .map(|(rule, line)| (rule, line.as_str()))
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
