//! Step tracing for automaton runs.
//!
//! Provides immutable tracking of the effective steps a machine has taken,
//! following functional programming principles: `record` returns a new
//! trace, never mutating the old one.

use super::state::{State, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single effective step.
///
/// A record is only produced when the cursor actually moves; steps with no
/// matching table entry leave no record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepRecord<S: State, C: Symbol> {
    /// The state the cursor moved from
    pub from: S,
    /// The symbol that drove the step
    pub via: C,
    /// The state the cursor moved to
    pub to: S,
    /// When the step occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered trace of effective steps.
///
/// The trace is immutable - `record` returns a new trace with the step
/// appended.
///
/// # Example
///
/// ```rust
/// use mailsift::builder::FsmBuilder;
/// use mailsift::{state_enum, symbol_enum};
///
/// state_enum! {
///     pub enum Phase {
///         One,
///         Two,
///     }
/// }
///
/// symbol_enum! {
///     pub enum Tick {
///         Next,
///     }
/// }
///
/// let mut machine = FsmBuilder::new()
///     .states([Phase::One, Phase::Two])
///     .start(Phase::One)
///     .transition(Phase::One, Tick::Next, Phase::Two)
///     .build()
///     .unwrap();
///
/// machine.step(Tick::Next);
///
/// let path = machine.trace().path();
/// assert_eq!(path, vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepTrace<S: State, C: Symbol> {
    records: Vec<StepRecord<S, C>>,
}

impl<S: State, C: Symbol> Default for StepTrace<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, C: Symbol> StepTrace<S, C> {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a step, returning a new trace.
    ///
    /// This is a pure function - the existing trace is left untouched.
    pub fn record(&self, record: StepRecord<S, C>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the state the first step left
    /// from, then the destination of each step. Empty for an empty trace.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Get the symbols consumed by effective steps, in order.
    pub fn symbols(&self) -> Vec<&C> {
        self.records.iter().map(|r| &r.via).collect()
    }

    /// Calculate total duration from first to last step.
    ///
    /// Returns `None` for an empty trace.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded steps in order.
    pub fn records(&self) -> &[StepRecord<S, C>] {
        &self.records
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether any step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
