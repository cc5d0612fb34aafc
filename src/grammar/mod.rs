//! Command-string grammar
//!
//! This module defines the surface syntax shared by axioms and rule bodies:
//! - [`token`]: the [`Token`] sum type (`Push | Pop | Repeat | Call`)
//! - [`tokenizer`]: a lazy char scanner producing [`Token`]s left to right
//!
//! # Grammar
//!
//! ```text
//! [                       push
//! ]                       pop
//! {content}(countExpr)    bounded repeat block; content may nest
//! name<arg1,arg2,...>     atom call; args are raw expression text
//! ```
//!
//! Anything between recognized tokens is skipped, not an error. The same
//! recognizer serves top-level axioms and rule templates, so the two are
//! interchangeable.

pub mod token;
pub mod tokenizer;

pub use token::Token;
pub use tokenizer::{parse_declaration, Tokenizer};
