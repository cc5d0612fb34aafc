//! A single production rule and its template instantiation pipeline
//!
//! A [`Rule`] pairs an atom name and formal parameter list with a fallback
//! template, an ordered list of `(condition, result)` branches, and the
//! action callback the executor invokes for the atom.
//!
//! # Instantiation
//!
//! Expanding a call `A<3,4>` against `A<p,q>` runs three passes over the
//! selected template:
//!
//! 1. **Parameter substitution** — every occurrence of each parameter name
//!    is replaced by the matching argument text, anywhere in the template.
//!    This is literal, unscoped substring replacement in declared order;
//!    a parameter name that collides with unrelated template text is
//!    replaced there too. Existing command strings depend on this exact
//!    behavior, so it is pinned by tests rather than "fixed".
//! 2. **Embedded-expression evaluation** — each remaining `<...>` region is
//!    split on commas and every piece is evaluated, so `B<p+q>` becomes
//!    `B<7>`.
//! 3. **Loop unrolling** — the result is re-tokenized and each repeat block
//!    is replaced by `n` byte-identical copies of its content.

use std::fmt;

use crate::engine::errors::LsystemError;
use crate::eval;
use crate::grammar::{parse_declaration, Token, Tokenizer};

/// Action invoked when the executor reaches a call to this rule's atom.
///
/// Receives the consumer and the call's evaluated argument strings.
pub type RuleAction<C> = Box<dyn Fn(&mut C, &[String])>;

/// One named, parameterized production.
pub struct Rule<C> {
    atom: String,
    parameters: Vec<String>,
    fallback: String,
    branches: Vec<(String, String)>,
    action: RuleAction<C>,
}

impl<C> Rule<C> {
    /// Parse a declaration key (`name<param1,param2,...>`) into a rule with
    /// no branches and the key itself as fallback.
    ///
    /// Using the key as the initial fallback makes a freshly registered
    /// rule expand to itself, which is what external layers rely on when
    /// they store genotype strings in the table purely for lookup.
    pub(crate) fn parse(key: &str, action: RuleAction<C>) -> Result<Self, LsystemError> {
        let (atom, parameters) =
            parse_declaration(key).ok_or_else(|| LsystemError::MalformedDeclaration {
                key: key.to_string(),
            })?;
        Ok(Rule {
            atom,
            parameters,
            fallback: key.to_string(),
            branches: Vec::new(),
            action,
        })
    }

    /// The atom name this rule is keyed under.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// Declared formal parameters, in call-site argument order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Template used when no branch condition matches.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Branches in evaluation order.
    pub fn branches(&self) -> &[(String, String)] {
        &self.branches
    }

    /// Append a `(condition, result)` branch. Branches are evaluated in
    /// insertion order; the first true condition wins.
    pub fn with_branch(&mut self, condition: &str, result: &str) -> &mut Self {
        self.branches
            .push((condition.to_string(), result.to_string()));
        self
    }

    /// Replace the fallback template.
    pub fn with_fallback(&mut self, template: &str) -> &mut Self {
        self.fallback = template.to_string();
        self
    }

    /// Fail unless the call site supplied exactly one argument per
    /// declared parameter.
    pub(crate) fn check_arity(&self, args: &[String]) -> Result<(), LsystemError> {
        if args.len() != self.parameters.len() {
            return Err(LsystemError::ArityMismatch {
                atom: self.atom.clone(),
                expected: self.parameters.len(),
                got: args.len(),
            });
        }
        Ok(())
    }

    /// Select the template for this call: first branch whose substituted
    /// condition evaluates true, otherwise the fallback.
    fn select_template(&self, args: &[String]) -> Result<&str, LsystemError> {
        for (condition, result) in &self.branches {
            let substituted = substitute(condition, &self.parameters, args);
            if eval::eval_condition(&substituted)? {
                return Ok(result);
            }
        }
        Ok(&self.fallback)
    }

    /// Run the full instantiation pipeline for a call with the given raw
    /// argument expressions, producing the replacement text.
    pub(crate) fn instantiate(&self, args: &[String]) -> Result<String, LsystemError> {
        self.check_arity(args)?;
        let template = self.select_template(args)?;
        let substituted = substitute(template, &self.parameters, args);
        let evaluated = evaluate_embedded(&substituted)?;
        unroll_loops(&evaluated)
    }

    /// Invoke the registered action with evaluated arguments.
    pub(crate) fn invoke(&self, consumer: &mut C, args: &[String]) {
        (self.action)(consumer, args);
    }
}

impl<C> fmt::Debug for Rule<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("atom", &self.atom)
            .field("parameters", &self.parameters)
            .field("fallback", &self.fallback)
            .field("branches", &self.branches)
            .finish_non_exhaustive()
    }
}

/// Literal parameter substitution, in declared order, anywhere in `template`.
fn substitute(template: &str, parameters: &[String], args: &[String]) -> String {
    let mut out = template.to_string();
    for (parameter, arg) in parameters.iter().zip(args) {
        out = out.replace(parameter.as_str(), arg);
    }
    out
}

/// Evaluate every `<...>` region in `template` piecewise on commas.
///
/// Only the region contents change; the atom name prefix and everything
/// outside angle brackets pass through untouched. Empty argument lists
/// (`<>`) are kept as-is.
fn evaluate_embedded(template: &str) -> Result<String, LsystemError> {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '<' {
            if let Some(close) = (i + 1..chars.len()).find(|&j| chars[j] == '>') {
                let inner: String = chars[i + 1..close].iter().collect();
                out.push('<');
                if !inner.is_empty() {
                    let pieces = inner
                        .split(',')
                        .map(eval::eval_to_string)
                        .collect::<Result<Vec<_>, _>>()?;
                    out.push_str(&pieces.join(","));
                }
                out.push('>');
                i = close + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    Ok(out)
}

/// Replace every repeat block with `n` raw copies of its content.
///
/// Content copies are byte-identical: nothing inside is re-substituted or
/// re-evaluated per repetition. A count of zero (or below) erases the
/// block.
fn unroll_loops(template: &str) -> Result<String, LsystemError> {
    let mut out = String::new();
    for token in Tokenizer::new(template) {
        match token {
            Token::Repeat { content, count } => {
                let n = eval::eval_count(&count)?;
                for _ in 0..n {
                    out.push_str(&content);
                }
            }
            other => out.push_str(&other.to_string()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(key: &str) -> Rule<()> {
        Rule::parse(key, Box::new(|_, _| {})).expect("declaration should parse")
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn malformed_key_is_rejected() {
        let result = Rule::<()>::parse("no-angle-brackets", Box::new(|_, _| {}));
        assert!(matches!(
            result,
            Err(LsystemError::MalformedDeclaration { .. })
        ));
    }

    #[test]
    fn fresh_rule_expands_to_itself() {
        let r = rule("Geno<x>");
        assert_eq!(r.instantiate(&args(&["5"])).unwrap(), "Geno<5>");
    }

    #[test]
    fn substitution_and_evaluation() {
        // Spec'd example: A<p,q> with template B<p+q>, called as A<3,4>.
        let mut r = rule("A<p,q>");
        r.with_fallback("B<p+q>");
        assert_eq!(r.instantiate(&args(&["3", "4"])).unwrap(), "B<7>");
    }

    #[test]
    fn first_true_branch_wins() {
        let mut r = rule("A<x>");
        r.with_branch("x>10", "big<x>")
            .with_branch("x>1", "mid<x>")
            .with_fallback("small<x>");

        assert_eq!(r.instantiate(&args(&["20"])).unwrap(), "big<20>");
        assert_eq!(r.instantiate(&args(&["5"])).unwrap(), "mid<5>");
        assert_eq!(r.instantiate(&args(&["0"])).unwrap(), "small<0>");
    }

    #[test]
    fn loops_unroll_with_raw_content() {
        let mut r = rule("A<x>");
        r.with_fallback("{F<x>}(x)");
        assert_eq!(r.instantiate(&args(&["3"])).unwrap(), "F<3>F<3>F<3>");
    }

    #[test]
    fn zero_count_erases_the_block() {
        let mut r = rule("A<x>");
        r.with_fallback("G<x>{F<x>}(x-1)");
        assert_eq!(r.instantiate(&args(&["1"])).unwrap(), "G<1>");
    }

    #[test]
    fn arity_mismatch_is_an_error() {
        let r = rule("A<p,q>");
        let err = r.instantiate(&args(&["1"])).unwrap_err();
        assert_eq!(
            err,
            LsystemError::ArityMismatch {
                atom: "A".to_string(),
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn substitution_is_literal_and_unscoped() {
        // Known hazard, pinned: the parameter name `x` also matches the
        // `x` inside the atom name `box`.
        let mut r = rule("A<x>");
        r.with_fallback("box<x>");
        assert_eq!(r.instantiate(&args(&["2"])).unwrap(), "bo2<2>");
    }

    #[test]
    fn condition_that_is_not_boolean_fails() {
        let mut r = rule("A<x>");
        r.with_branch("x+1", "B<x>");
        assert!(matches!(
            r.instantiate(&args(&["1"])),
            Err(LsystemError::Expression { .. })
        ));
    }
}
