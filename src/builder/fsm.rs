//! Builder for constructing validated machines.

use crate::builder::error::BuildError;
use crate::builder::rule::TransitionRule;
use crate::core::{Fsm, State, Symbol};
use std::collections::{HashMap, HashSet};

/// Builder for constructing state machines with a fluent API.
///
/// `build()` performs the construction contract checks: the state set must
/// be non-empty, the start state and every transition endpoint must belong
/// to it, and no two rules may share a (state, symbol) pair. A machine that
/// builds successfully is deterministic by construction.
///
/// # Example
///
/// ```
/// use mailsift::builder::{BuildError, FsmBuilder};
/// use mailsift::{state_enum, symbol_enum};
///
/// state_enum! {
///     pub enum S {
///         A,
///         B,
///     }
/// }
///
/// symbol_enum! {
///     pub enum In {
///         Go,
///     }
/// }
///
/// let result = FsmBuilder::new()
///     .states([S::A, S::B])
///     .start(S::A)
///     .transition(S::A, In::Go, S::B)
///     .transition(S::A, In::Go, S::A)
///     .build();
///
/// assert!(matches!(result, Err(BuildError::DuplicateTransition { .. })));
/// ```
pub struct FsmBuilder<S: State, C: Symbol> {
    states: Vec<S>,
    rules: Vec<TransitionRule<S, C>>,
    start: Option<S>,
    accepting: Vec<S>,
}

impl<S: State, C: Symbol> FsmBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            rules: Vec::new(),
            start: None,
            accepting: Vec::new(),
        }
    }

    /// Declare a single state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    /// Add a transition rule from its three components.
    pub fn transition(mut self, from: S, on: C, to: S) -> Self {
        self.rules.push(TransitionRule::new(from, on, to));
        self
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: TransitionRule<S, C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: impl IntoIterator<Item = TransitionRule<S, C>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the machine, validating the table.
    pub fn build(self) -> Result<Fsm<S, C>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let states: HashSet<S> = self.states.into_iter().collect();
        if !states.contains(&start) {
            return Err(BuildError::UnknownStartState {
                state: start.name().to_string(),
            });
        }

        let mut table: HashMap<(S, C), S> = HashMap::with_capacity(self.rules.len());
        for rule in self.rules {
            if !states.contains(&rule.from) {
                return Err(BuildError::UnknownSourceState {
                    state: rule.from.name().to_string(),
                    symbol: rule.on.name().to_string(),
                });
            }
            if !states.contains(&rule.to) {
                return Err(BuildError::UnknownTargetState {
                    state: rule.to.name().to_string(),
                    symbol: rule.on.name().to_string(),
                });
            }
            if table.insert((rule.from, rule.on), rule.to).is_some() {
                return Err(BuildError::DuplicateTransition {
                    state: rule.from.name().to_string(),
                    symbol: rule.on.name().to_string(),
                });
            }
        }

        let accepting: HashSet<S> = self.accepting.into_iter().collect();
        Ok(Fsm::from_validated(states, table, start, accepting))
    }
}

impl<S: State, C: Symbol> Default for FsmBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
        End,
        Orphan,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Middle => "Middle",
                Self::End => "End",
                Self::Orphan => "Orphan",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestSymbol {
        Next,
        Skip,
    }

    impl Symbol for TestSymbol {
        fn name(&self) -> &str {
            match self {
                Self::Next => "Next",
                Self::Skip => "Skip",
            }
        }
    }

    #[test]
    fn builder_requires_states() {
        let result = FsmBuilder::<TestState, TestSymbol>::new()
            .start(TestState::Start)
            .build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn builder_requires_start_state() {
        let result = FsmBuilder::<TestState, TestSymbol>::new()
            .states([TestState::Start, TestState::End])
            .build();

        assert!(matches!(result, Err(BuildError::MissingStartState)));
    }

    #[test]
    fn builder_rejects_undeclared_start_state() {
        let result = FsmBuilder::<TestState, TestSymbol>::new()
            .states([TestState::Middle, TestState::End])
            .start(TestState::Start)
            .build();

        assert!(matches!(result, Err(BuildError::UnknownStartState { .. })));
    }

    #[test]
    fn builder_rejects_undeclared_source_state() {
        let result = FsmBuilder::new()
            .states([TestState::Start, TestState::End])
            .start(TestState::Start)
            .transition(TestState::Orphan, TestSymbol::Next, TestState::End)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::UnknownSourceState { .. })
        ));
    }

    #[test]
    fn builder_rejects_undeclared_target_state() {
        let result = FsmBuilder::new()
            .states([TestState::Start, TestState::End])
            .start(TestState::Start)
            .transition(TestState::Start, TestSymbol::Next, TestState::Orphan)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::UnknownTargetState { .. })
        ));
    }

    #[test]
    fn builder_rejects_duplicate_pair() {
        let result = FsmBuilder::new()
            .states([TestState::Start, TestState::Middle, TestState::End])
            .start(TestState::Start)
            .transition(TestState::Start, TestSymbol::Next, TestState::Middle)
            .transition(TestState::Start, TestSymbol::Next, TestState::End)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn same_source_different_symbols_is_fine() {
        let result = FsmBuilder::new()
            .states([TestState::Start, TestState::Middle, TestState::End])
            .start(TestState::Start)
            .transition(TestState::Start, TestSymbol::Next, TestState::Middle)
            .transition(TestState::Start, TestSymbol::Skip, TestState::End)
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = FsmBuilder::new()
            .states([TestState::Start, TestState::Middle, TestState::End])
            .start(TestState::Start)
            .accepting(TestState::End)
            .transition(TestState::Start, TestSymbol::Next, TestState::Middle)
            .transition(TestState::Middle, TestSymbol::Next, TestState::End)
            .build();

        assert!(machine.is_ok());
        let machine = machine.unwrap();
        assert_eq!(machine.current_state(), &TestState::Start);
        assert!(machine.is_at_start());
        assert!(!machine.is_accepting());
    }

    #[test]
    fn rules_can_be_added_as_a_batch() {
        let rules = vec![
            TransitionRule::new(TestState::Start, TestSymbol::Next, TestState::Middle),
            TransitionRule::new(TestState::Middle, TestSymbol::Next, TestState::End),
        ];

        let machine = FsmBuilder::new()
            .states([TestState::Start, TestState::Middle, TestState::End])
            .start(TestState::Start)
            .rules(rules)
            .build();

        assert!(machine.is_ok());
    }
}
