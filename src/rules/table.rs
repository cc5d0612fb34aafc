//! Rule table: atom name → production rule
//!
//! The table is the single source of truth for the grammar. It is owned by
//! the composing application (via [`crate::LSystem`] or directly) and is
//! only ever mutated between traversals, never during one.

use std::collections::hash_map::Entry;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::engine::errors::LsystemError;
use crate::rules::rule::{Rule, RuleAction};

/// Mapping from atom name to [`Rule`], generic over the consumer type the
/// registered actions drive.
pub struct RuleTable<C> {
    rules: FxHashMap<String, Rule<C>>,
}

impl<C> RuleTable<C> {
    pub fn new() -> Self {
        Self {
            rules: FxHashMap::default(),
        }
    }

    /// Parse `key` (`name<param1,param2,...>`) and register a rule for its
    /// atom with the given action, no branches, and the key itself as
    /// fallback.
    ///
    /// Returns the rule for builder-style configuration:
    ///
    /// ```rust,ignore
    /// table.add_rule("F<x>", forward)?
    ///     .with_branch("x>3", "F<x/2>F<x/2>")
    ///     .with_fallback("F<x>");
    /// ```
    ///
    /// Re-registering an atom replaces its previous rule.
    pub fn add_rule(
        &mut self,
        key: &str,
        action: impl Fn(&mut C, &[String]) + 'static,
    ) -> Result<&mut Rule<C>, LsystemError> {
        let rule = Rule::parse(key, Box::new(action) as RuleAction<C>)?;
        let slot = match self.rules.entry(rule.atom().to_string()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(rule);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(rule),
        };
        Ok(slot)
    }

    /// Remove and return the rule for `atom`, e.g. when a genotype becomes
    /// obsolete.
    pub fn remove_rule(&mut self, atom: &str) -> Option<Rule<C>> {
        self.rules.remove(atom)
    }

    /// Look up the rule for `atom`.
    pub fn lookup(&self, atom: &str) -> Option<&Rule<C>> {
        self.rules.get(atom)
    }

    /// Look up the rule for `atom` for further configuration.
    pub fn lookup_mut(&mut self, atom: &str) -> Option<&mut Rule<C>> {
        self.rules.get_mut(atom)
    }

    /// Resolve `atom` or fail with [`LsystemError::UnknownAtom`].
    pub(crate) fn resolve(&self, atom: &str) -> Result<&Rule<C>, LsystemError> {
        self.lookup(atom).ok_or_else(|| LsystemError::UnknownAtom {
            atom: atom.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<C> Default for RuleTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for RuleTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rules.iter()).finish()
    }
}
