//! Production rules
//!
//! - [`rule`]: one named, parameterized production and its template
//!   instantiation pipeline
//! - [`table`]: the atom-name-keyed [`RuleTable`] both traversals resolve
//!   calls against

pub mod rule;
pub mod table;

pub use rule::{Rule, RuleAction};
pub use table::RuleTable;
