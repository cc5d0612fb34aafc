//! Consumer interface driven by the executor
//!
//! The engine never stores or inspects consumer state; everything the
//! command stream accumulates (a state stack, turtle position, spawned
//! geometry) lives inside the implementor and is mutated exclusively
//! through these hooks and through the per-rule actions registered with
//! [`crate::rules::RuleTable::add_rule`].

/// Push/pop/prepare hooks invoked while executing a command string.
pub trait Consumer {
    /// A `[` token was executed: save the current state.
    fn on_push(&mut self);

    /// A `]` token was executed: restore the most recently saved state.
    fn on_pop(&mut self);

    /// An atom call is about to run its action.
    ///
    /// Fires after the call's arguments are evaluated and before the
    /// rule's registered action. The default does nothing.
    fn on_prepare(&mut self, atom: &str) {
        let _ = atom;
    }
}
