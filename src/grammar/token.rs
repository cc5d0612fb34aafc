//! Token definitions for the command-string grammar
//!
//! Every token carries the raw expression text it was recognized from;
//! nothing is evaluated at tokenization time.

use std::fmt;

/// All token variants produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `[` — save the consumer's current state.
    Push,

    /// `]` — restore the most recently saved state.
    Pop,

    /// `{content}(countExpr)` — bounded repetition of `content`.
    ///
    /// `content` is the raw text between the braces (it may contain any
    /// tokens, including nested repeat blocks); `count` is the raw count
    /// expression without its surrounding parentheses.
    Repeat { content: String, count: String },

    /// `name<arg1,arg2,...>` — a parameterized atom call.
    ///
    /// `args` are the raw comma-separated argument expressions; empty
    /// pieces are removed, so `F<>` carries no arguments.
    Call { atom: String, args: Vec<String> },
}

impl fmt::Display for Token {
    /// Renders the token back in its surface syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Push => write!(f, "["),
            Token::Pop => write!(f, "]"),
            Token::Repeat { content, count } => write!(f, "{{{}}}({})", content, count),
            Token::Call { atom, args } => write!(f, "{}<{}>", atom, args.join(",")),
        }
    }
}
