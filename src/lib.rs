//! Mailsift: a table-driven finite state machine engine with an email filter
//!
//! Mailsift keeps the automaton itself pure data: a state set, a transition
//! table keyed by (state, symbol), a start state, and an accepting set. The
//! table is validated once at construction time (no duplicate entries, no
//! references to undeclared states) and interpreted one symbol per step at
//! run time. On top of the generic engine sits [`email::EmailFilter`], which
//! classifies characters into token symbols and empties any string the
//! automaton rejects.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the [`core::State`] trait
//! - **Symbol**: classified input category via the [`core::Symbol`] trait
//! - **Table**: declarative transition rules, validated at build time
//! - **Trace**: immutable record of the steps a machine has taken
//!
//! # Example
//!
//! ```rust
//! use mailsift::email::EmailFilter;
//!
//! let filter = EmailFilter::new();
//!
//! assert_eq!(filter.filter("ab@cd.com"), "ab@cd.com");
//! assert_eq!(filter.filter("ab@.com"), "");
//! assert_eq!(filter.filter("user name@x.com"), "");
//! ```
//!
//! Custom machines are built the same way the email table is:
//!
//! ```rust
//! use mailsift::builder::FsmBuilder;
//! use mailsift::{state_enum, symbol_enum};
//!
//! state_enum! {
//!     pub enum DoorState {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! symbol_enum! {
//!     pub enum DoorInput {
//!         Push,
//!         Pull,
//!     }
//! }
//!
//! let mut door = FsmBuilder::new()
//!     .states([DoorState::Closed, DoorState::Open])
//!     .start(DoorState::Closed)
//!     .accepting(DoorState::Closed)
//!     .transition(DoorState::Closed, DoorInput::Pull, DoorState::Open)
//!     .transition(DoorState::Open, DoorInput::Push, DoorState::Closed)
//!     .build()
//!     .unwrap();
//!
//! door.step(DoorInput::Pull);
//! assert_eq!(door.current_state(), &DoorState::Open);
//! door.step(DoorInput::Push);
//! assert!(door.is_accepting());
//! ```

pub mod builder;
pub mod core;
pub mod email;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmBuilder, TransitionRule};
pub use crate::core::{Fsm, State, StepRecord, StepTrace, Symbol};
pub use crate::email::EmailFilter;
pub use crate::snapshot::{Snapshot, SnapshotError};
