//! Engine: error taxonomy, consumer interface, and the two traversals
//!
//! - [`errors`]: the [`LsystemError`] taxonomy
//! - [`consumer`]: the [`Consumer`] hook trait the executor drives
//! - [`lsystem`]: the [`LSystem`] facade with `expand` / `execute` / `run`

pub mod consumer;
pub mod errors;
pub mod lsystem;

pub use consumer::Consumer;
pub use errors::LsystemError;
pub use lsystem::LSystem;
