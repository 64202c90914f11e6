//! Declarative transition rules.

use crate::core::{State, Symbol};

/// One entry of a transition table: (source state, symbol) -> destination.
///
/// Rules are plain data, so a whole table can be written as a literal list
/// (see the [`transition_table!`](crate::transition_table) macro) and the
/// builder's validation pass has a uniform structure to iterate over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRule<S: State, C: Symbol> {
    /// The state this rule applies in
    pub from: S,
    /// The symbol that triggers it
    pub on: C,
    /// The state the cursor moves to
    pub to: S,
}

impl<S: State, C: Symbol> TransitionRule<S, C> {
    /// Create a rule from its three components.
    pub fn new(from: S, on: C, to: S) -> Self {
        Self { from, on, to }
    }
}
