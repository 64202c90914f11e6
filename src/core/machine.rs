//! The table-driven automaton interpreter.

use super::state::{State, Symbol};
use super::trace::{StepRecord, StepTrace};
use chrono::Utc;
use std::collections::{HashMap, HashSet};

/// A deterministic finite state machine interpreting a validated table.
///
/// The machine owns its state set, a transition table keyed by
/// (state, symbol), the start state, the accepting set, and a mutable
/// cursor. The cursor is the only thing that moves after construction;
/// the table is immutable data.
///
/// Machines are built through [`FsmBuilder`](crate::builder::FsmBuilder),
/// which performs all construction-time validation. Cloning a machine
/// yields an independent cursor over the same table, which is how callers
/// run concurrent filtering operations safely.
///
/// # Example
///
/// ```rust
/// use mailsift::builder::FsmBuilder;
/// use mailsift::{state_enum, symbol_enum};
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// symbol_enum! {
///     pub enum Signal {
///         Go,
///         Stop,
///     }
/// }
///
/// let mut light = FsmBuilder::new()
///     .states([Light::Red, Light::Green])
///     .start(Light::Red)
///     .accepting(Light::Red)
///     .transition(Light::Red, Signal::Go, Light::Green)
///     .transition(Light::Green, Signal::Stop, Light::Red)
///     .build()
///     .unwrap();
///
/// assert!(light.is_at_start());
/// light.step(Signal::Go);
/// assert_eq!(light.current_state(), &Light::Green);
/// light.reset();
/// assert!(light.is_at_start());
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<S: State, C: Symbol> {
    states: HashSet<S>,
    table: HashMap<(S, C), S>,
    start: S,
    accepting: HashSet<S>,
    current: S,
    trace: StepTrace<S, C>,
}

impl<S: State, C: Symbol> Fsm<S, C> {
    /// Assemble a machine from parts the builder has already validated.
    pub(crate) fn from_validated(
        states: HashSet<S>,
        table: HashMap<(S, C), S>,
        start: S,
        accepting: HashSet<S>,
    ) -> Self {
        Self {
            states,
            table,
            start,
            accepting,
            current: start,
            trace: StepTrace::new(),
        }
    }

    /// Feed one symbol to the machine.
    ///
    /// If the table has an entry for (current state, symbol) the cursor
    /// advances to the destination and the step is recorded in the trace.
    /// If not, the cursor stays put: missing entries are quiescence, not an
    /// error. Callers that care about stagnation must detect it themselves,
    /// e.g. by checking [`current_state`](Self::current_state) before and
    /// after.
    ///
    /// Returns the state the cursor is on after the step.
    pub fn step(&mut self, symbol: C) -> &S {
        if let Some(next) = self.table.get(&(self.current, symbol)).copied() {
            self.trace = self.trace.record(StepRecord {
                from: self.current,
                via: symbol,
                to: next,
                timestamp: Utc::now(),
            });
            self.current = next;
        }
        &self.current
    }

    /// Return the cursor to the start state.
    ///
    /// Nothing else is mutated; in particular the trace keeps its records.
    /// For a fully pristine run, clone the machine before stepping instead.
    pub fn reset(&mut self) {
        self.current = self.start;
    }

    /// Check if the cursor is currently on an accepting state.
    pub fn is_accepting(&self) -> bool {
        self.accepting.contains(&self.current)
    }

    /// Check if the cursor is currently on the start state.
    pub fn is_at_start(&self) -> bool {
        self.current == self.start
    }

    /// Get the state the cursor is currently on.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the start state.
    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// Get the trace of effective steps taken so far.
    pub fn trace(&self) -> &StepTrace<S, C> {
        &self.trace
    }

    /// Check whether a state belongs to the machine's declared state set.
    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Move the cursor and trace to a previously captured run.
    pub(crate) fn restore_run(&mut self, current: S, trace: StepTrace<S, C>) {
        self.current = current;
        self.trace = trace;
    }
}
