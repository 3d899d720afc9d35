/// Rule catalog - ordered, immutable rule sequence with first-match-wins lookup
use crate::error::CatalogError;
use crate::region::RegionState;

use super::builtin::builtin_rules;
use super::types::{Rule, RuleDef};

/// Ordered rule sequence: built-in rules followed by custom rules.
///
/// Catalog order is precedence order. Custom rules are appended after the
/// built-ins, so a built-in always wins over a custom rule matching the same
/// line. Immutable once built; share it between classifiers with `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<Rule>,
    builtin_len: usize,
}

impl Catalog {
    /// Catalog containing only the built-in rules
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(Vec::new())
    }

    /// Build the effective catalog from the built-ins plus `custom`.
    ///
    /// Every pattern is compiled and every region end id resolved here, so a
    /// broken rule fails construction instead of surfacing per line.
    pub fn new(custom: Vec<RuleDef>) -> Result<Self, CatalogError> {
        let builtins = builtin_rules();
        let builtin_len = builtins.len();
        let defs: Vec<RuleDef> = builtins.into_iter().chain(custom).collect();

        let mut rules = defs
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>, _>>()?;

        for (idx, def) in defs.iter().enumerate() {
            let Some(end_id) = def.ignore_region_end_id.as_deref() else {
                continue;
            };
            // Ids are not unique; the first rule carrying the id closes the region.
            let end_idx = defs.iter().position(|d| d.id == end_id).ok_or_else(|| {
                CatalogError::UnknownRegionEnd {
                    id: def.id.clone(),
                    end_id: end_id.to_string(),
                }
            })?;
            rules[idx].set_region_end(end_idx);
        }

        tracing::debug!(
            builtin = builtin_len,
            custom = rules.len() - builtin_len,
            "rule catalog built"
        );

        Ok(Self { rules, builtin_len })
    }

    /// All rules in precedence order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn builtins(&self) -> &[Rule] {
        &self.rules[..self.builtin_len]
    }

    #[must_use]
    pub fn custom(&self) -> &[Rule] {
        &self.rules[self.builtin_len..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Index of the first rule carrying `id`
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.id() == id)
    }

    /// Find the rule a line matches under the given region state.
    ///
    /// Blank lines never match. Outside a region the first matching rule in
    /// catalog order wins. Inside a region only the region's closing rule is
    /// tried; anything else is inert. This has no side effects; see
    /// [`LineClassifier`](crate::classifier::LineClassifier) for the stateful driver.
    #[must_use]
    pub fn first_match(&self, line: &str, state: &RegionState) -> Option<(usize, &Rule)> {
        if line.trim().is_empty() {
            return None;
        }

        match *state {
            RegionState::Idle => self
                .rules
                .iter()
                .enumerate()
                .find(|(_, rule)| rule.is_match(line)),
            RegionState::InRegion { opening } => {
                let end_idx = self.rules.get(opening)?.region_end()?;
                let closing = &self.rules[end_idx];
                closing.is_match(line).then_some((end_idx, closing))
            }
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
