//! Builder API for validated machine construction.
//!
//! This module provides the fluent builder and macros for declaring state
//! machines as data. All of the construction-time validation lives in
//! [`FsmBuilder::build`]: undeclared states and duplicate (state, symbol)
//! entries are rejected before a machine ever steps.

pub mod error;
pub mod fsm;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use fsm::FsmBuilder;
pub use rule::TransitionRule;

use crate::core::{State, Symbol};

/// Create a single transition rule.
///
/// Shorthand for [`TransitionRule::new`], handy when assembling rule lists
/// without the [`transition_table!`](crate::transition_table) macro.
///
/// # Example
///
/// ```
/// use mailsift::builder::rule;
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
/// let r = rule(S::A, In::Go, S::B);
/// assert_eq!(r.to, S::B);
/// ```
pub fn rule<S, C>(from: S, on: C, to: S) -> TransitionRule<S, C>
where
    S: State,
    C: Symbol,
{
    TransitionRule::new(from, on, to)
}
