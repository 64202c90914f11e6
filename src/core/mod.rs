//! Core automaton types and logic.
//!
//! This module contains the pure core of the machine:
//! - State and input-symbol definitions via the `State` and `Symbol` traits
//! - The table-driven `Fsm` interpreter
//! - Immutable step tracing
//!
//! Everything here is deterministic and side-effect free; the only mutation
//! in the whole module is the `Fsm` cursor advancing through its table.

mod machine;
mod state;
mod trace;

pub use machine::Fsm;
pub use state::{State, Symbol};
pub use trace::{StepRecord, StepTrace};
