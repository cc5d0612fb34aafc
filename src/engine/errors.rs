//! Error types for the L-system engine
//!
//! All errors are fatal for the call they occur in: a failing expansion or
//! execution returns immediately with no partial result, and the caller
//! decides whether to discard the offending command string, log it, or halt.

use std::fmt;

/// Errors raised by rule registration, expansion, and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LsystemError {
    /// A rule declaration key did not match the `name<param,...>` grammar.
    MalformedDeclaration { key: String },

    /// A command string called an atom that is not in the rule table.
    UnknownAtom { atom: String },

    /// The expression evaluator rejected a substituted expression.
    Expression { expr: String, message: String },

    /// A call site supplied a different number of arguments than the rule
    /// declares parameters.
    ArityMismatch {
        atom: String,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for LsystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LsystemError::MalformedDeclaration { key } => {
                write!(f, "Malformed rule declaration '{}'", key)
            }
            LsystemError::UnknownAtom { atom } => {
                write!(f, "Unknown atom '{}'", atom)
            }
            LsystemError::Expression { expr, message } => {
                write!(f, "Failed to evaluate expression '{}': {}", expr, message)
            }
            LsystemError::ArityMismatch {
                atom,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Atom '{}' declares {} parameter{}, got {} argument{}",
                    atom,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    got,
                    if *got == 1 { "" } else { "s" },
                )
            }
        }
    }
}

impl std::error::Error for LsystemError {}
