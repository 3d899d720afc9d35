//! Stateful line classifier.
//!
//! [`LineClassifier`] feeds lines, in document order, through a shared
//! [`Catalog`] while tracking the suppression region and remembering the last
//! successful match. One classifier handles one document; create a new one (or
//! call [`LineClassifier::reset`]) per document so region state never leaks.

use std::sync::Arc;

use crate::memory::ClassificationMemory;
use crate::region::{RegionState, RegionTracker};
use crate::rules::{Catalog, Rule};

/// Classifies lines one at a time against a rule catalog
#[derive(Debug, Clone)]
pub struct LineClassifier {
    catalog: Arc<Catalog>,
    region: RegionTracker,
    memory: ClassificationMemory,
}

impl LineClassifier {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            region: RegionTracker::new(),
            memory: ClassificationMemory::new(),
        }
    }

    /// Classify one raw line (leading whitespace included).
    ///
    /// Returns the first rule in catalog order whose pattern matches, or
    /// `None` for blank lines, plain statements, and lines inside a region.
    /// Inside a region only the region's closing rule is tried; when it
    /// matches the region is closed and the rule is returned.
    pub fn classify(&mut self, line: &str) -> Option<&Rule> {
        self.classify_indexed(line).map(|(_, rule)| rule)
    }

    /// Like [`classify`](Self::classify), also returning the rule's catalog index
    pub fn classify_indexed(&mut self, line: &str) -> Option<(usize, &Rule)> {
        let state = self.region.state();
        let (index, rule) = self.catalog.first_match(line, &state)?;

        if let RegionState::InRegion { opening } = state {
            tracing::debug!(
                opening = self.catalog.rules()[opening].id(),
                closing = rule.id(),
                "region closed"
            );
            self.region.exit();
        }

        if rule.opens_region() {
            // Any previous region was closed above, so this cannot nest.
            match self.region.enter(index) {
                Ok(()) => tracing::debug!(opening = rule.id(), "region opened"),
                Err(err) => tracing::warn!(%err, opening = rule.id(), "region not opened"),
            }
        }

        self.memory.record(rule, line);
        Some((index, rule))
    }

    /// Last successful match and the line it matched
    #[must_use]
    pub fn last_match(&self) -> Option<(&Rule, &str)> {
        self.memory.last()
    }

    #[must_use]
    pub fn region(&self) -> RegionState {
        self.region.state()
    }

    /// Whether the next line is inside a suppression region
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.region.is_suppressed()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start a fresh document: leave any region and forget the last match
    pub fn reset(&mut self) {
        self.region.reset();
        self.memory.clear();
    }
}
