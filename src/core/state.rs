//! Core traits for automaton states and input symbols.
//!
//! States and symbols are both small closed enums in practice. The traits
//! carry the bounds the table interpreter needs (hashable keys, serde for
//! snapshots) plus pure inspection methods.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// All methods are pure. States are immutable values describing a position
/// in a state machine; the full set of them is fixed when the machine is
/// built and never changes afterward.
///
/// # Required Traits
///
/// - `Copy + Eq + Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for snapshots
///
/// # Example
///
/// ```rust
/// use mailsift::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum LineState {
///     Empty,
///     Text,
///     Garbage,
/// }
///
/// impl State for LineState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Empty => "Empty",
///             Self::Text => "Text",
///             Self::Garbage => "Garbage",
///         }
///     }
///
///     fn is_dead(&self) -> bool {
///         matches!(self, Self::Garbage)
///     }
/// }
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is the dead (permanently rejecting) state.
    ///
    /// Once a machine's cursor lands on a dead state, drivers like the
    /// email filter treat the whole input as rejected.
    ///
    /// Default implementation returns `false`.
    fn is_dead(&self) -> bool {
        false
    }
}

/// Trait for classified input symbols.
///
/// A symbol is the category one raw input unit (here, one character) maps
/// to; the automaton consumes one symbol per step. Symbols are ephemeral
/// values, never stored by the machine outside its step trace.
pub trait Symbol:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the symbol's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Running,
        Rejected,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Running => "Running",
                Self::Rejected => "Rejected",
            }
        }

        fn is_dead(&self) -> bool {
            matches!(self, Self::Rejected)
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestSymbol {
        Tick,
    }

    impl Symbol for TestSymbol {
        fn name(&self) -> &str {
            "Tick"
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Start.name(), "Start");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Rejected.name(), "Rejected");
    }

    #[test]
    fn is_dead_identifies_rejecting_state() {
        assert!(!TestState::Start.is_dead());
        assert!(!TestState::Running.is_dead());
        assert!(TestState::Rejected.is_dead());
    }

    #[test]
    fn symbol_name_is_stable() {
        assert_eq!(TestSymbol::Tick.name(), "Tick");
        assert_eq!(TestSymbol::Tick.name(), TestSymbol::Tick.name());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Running;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
