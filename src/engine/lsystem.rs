//! The L-system engine: iterated expansion and stateful execution
//!
//! Both traversals walk the same token stream but fold it differently:
//!
//! - **Expansion** is pure text rewriting. Atom calls are replaced by their
//!   instantiated templates; repeat blocks are expanded once and their
//!   output concatenated `n` times. Applied for a fixed number of rounds,
//!   never to a fixed point — a non-terminating grammar just leaves
//!   unexpanded calls behind.
//! - **Execution** performs side effects against a [`Consumer`]. Repeat
//!   blocks are expanded once but *re-executed* `n` times, so push/pop
//!   effects accumulate per repetition in order. For stateless text output
//!   the two foldings agree; under stateful hooks they deliberately do not.
//!
//! The engine itself is stateless between calls: everything accumulated
//! lives in the consumer, and the rule table must not be mutated while a
//! traversal is in progress.

use tracing::{debug, trace};

use crate::engine::consumer::Consumer;
use crate::engine::errors::LsystemError;
use crate::eval;
use crate::grammar::{Token, Tokenizer};
use crate::rules::{Rule, RuleTable};

/// Facade owning the rule table and exposing the engine entry points.
///
/// Generic over the consumer type `C` the registered rule actions drive.
#[derive(Debug)]
pub struct LSystem<C> {
    rules: RuleTable<C>,
}

impl<C> LSystem<C> {
    pub fn new() -> Self {
        Self {
            rules: RuleTable::new(),
        }
    }

    /// The rule table, for inspection.
    pub fn rules(&self) -> &RuleTable<C> {
        &self.rules
    }

    /// The rule table, for mutation between traversals.
    pub fn rules_mut(&mut self) -> &mut RuleTable<C> {
        &mut self.rules
    }

    /// Register a rule; see [`RuleTable::add_rule`].
    pub fn add_rule(
        &mut self,
        key: &str,
        action: impl Fn(&mut C, &[String]) + 'static,
    ) -> Result<&mut Rule<C>, LsystemError> {
        self.rules.add_rule(key, action)
    }

    /// Remove the rule for `atom`; see [`RuleTable::remove_rule`].
    pub fn remove_rule(&mut self, atom: &str) -> Option<Rule<C>> {
        self.rules.remove_rule(atom)
    }

    /// Rewrite `axiom` for `iterations` rounds and return the unfolded
    /// command string. Zero iterations returns the axiom unchanged.
    pub fn expand(&self, axiom: &str, iterations: u32) -> Result<String, LsystemError> {
        let mut current = axiom.to_string();
        for round in 0..iterations {
            current = expand_once(&self.rules, &current)?;
            debug!(round, length = current.len(), "expansion round complete");
        }
        Ok(current)
    }
}

impl<C: Consumer> LSystem<C> {
    /// Execute `axiom` against `consumer` in a single traversal, with no
    /// prior expansion.
    pub fn execute(&self, axiom: &str, consumer: &mut C) -> Result<(), LsystemError> {
        execute_tokens(&self.rules, axiom, consumer)
    }

    /// Apply `iterations` expansion rounds, then execute the result.
    pub fn run(
        &self,
        axiom: &str,
        consumer: &mut C,
        iterations: u32,
    ) -> Result<(), LsystemError> {
        let expanded = self.expand(axiom, iterations)?;
        self.execute(&expanded, consumer)
    }
}

impl<C> Default for LSystem<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// One full left-to-right rewriting pass.
fn expand_once<C>(rules: &RuleTable<C>, axiom: &str) -> Result<String, LsystemError> {
    let mut out = String::new();
    for token in Tokenizer::new(axiom) {
        match token {
            Token::Push => out.push('['),
            Token::Pop => out.push(']'),
            Token::Repeat { content, count } => {
                let n = eval::eval_count(&count)?;
                if n == 0 {
                    continue;
                }
                let expanded = expand_once(rules, &content)?;
                for _ in 0..n {
                    out.push_str(&expanded);
                }
            }
            Token::Call { atom, args } => {
                let rule = rules.resolve(&atom)?;
                out.push_str(&rule.instantiate(&args)?);
            }
        }
    }
    Ok(out)
}

/// One stateful traversal, dispatching hooks to the consumer.
fn execute_tokens<C: Consumer>(
    rules: &RuleTable<C>,
    axiom: &str,
    consumer: &mut C,
) -> Result<(), LsystemError> {
    for token in Tokenizer::new(axiom) {
        match token {
            Token::Push => consumer.on_push(),
            Token::Pop => consumer.on_pop(),
            Token::Repeat { content, count } => {
                let n = eval::eval_count(&count)?;
                if n == 0 {
                    continue;
                }
                // Expand once, then re-execute the same text n times so the
                // consumer sees each repetition's side effects in order.
                let expanded = expand_once(rules, &content)?;
                for _ in 0..n {
                    execute_tokens(rules, &expanded, consumer)?;
                }
            }
            Token::Call { atom, args } => {
                let rule = rules.resolve(&atom)?;
                rule.check_arity(&args)?;
                let values = args
                    .iter()
                    .map(|arg| eval::eval_to_string(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                trace!(atom = %rule.atom(), args = ?values, "executing call");
                consumer.on_prepare(rule.atom());
                rule.invoke(consumer, &values);
            }
        }
    }
    Ok(())
}
