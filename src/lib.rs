//! # Introduction
//!
//! A parametric L-system engine: a symbolic rewriting grammar whose rules
//! are named atoms taking numeric parameters, with templates selected by
//! evaluated boolean conditions, arguments computed through arithmetic
//! expressions, and bounded repeat blocks. A compact axiom unfolds into a
//! long command sequence, which is then executed against a push/pop
//! stack-based consumer (turtle-graphics style).
//!
//! ## Pipeline
//!
//! ```text
//! Axiom → Expander (N rounds) → command string → Executor → Consumer hooks
//!              ↘ Tokenizer + Rule Table + expression evaluator ↙
//! ```
//!
//! 1. [`grammar`] — the [`Token`] sum type and the lazy tokenizer shared by
//!    axioms and rule templates.
//! 2. [`rules`] — the [`RuleTable`] and [`Rule`] records: fallback template,
//!    ordered condition branches, and the action callback per atom.
//! 3. [`engine`] — the [`LSystem`] facade: pure textual expansion, stateful
//!    execution, and the [`Consumer`] hook trait.
//! 4. [`eval`] — thin adapter over the external `evalexpr` evaluator used
//!    for conditions, call arguments, and repeat counts.
//!
//! ## Example
//!
//! ```rust,ignore
//! use parametric_lsystem::LSystem;
//!
//! let mut sys: LSystem<Turtle> = LSystem::new();
//! sys.add_rule("F<x>", |t: &mut Turtle, args: &[String]| t.forward(args))?;
//! sys.add_rule("Tree<x>", |_, _| {})?
//!     .with_branch("x>0", "F<x>[Tree<x-1>][Tree<x-1>]")
//!     .with_fallback("F<1>");
//!
//! sys.run("Tree<3>", &mut turtle, 3)?;
//! ```

pub mod engine;
pub mod eval;
pub mod grammar;
pub mod rules;

pub use engine::{Consumer, LSystem, LsystemError};
pub use grammar::{Token, Tokenizer};
pub use rules::{Rule, RuleAction, RuleTable};
