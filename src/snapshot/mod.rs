//! Snapshot and resume functionality for machine runs.
//!
//! A snapshot captures where a machine's cursor is and the trace that got
//! it there, in a serializable form. Transition tables are never
//! serialized - they are code, and a snapshot is only meaningful when
//! restored into a machine built from the same table.

use crate::core::{Fsm, State, StepTrace, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a machine's run.
///
/// # Example
///
/// ```rust
/// use mailsift::snapshot::Snapshot;
/// use mailsift::builder::FsmBuilder;
/// use mailsift::{state_enum, symbol_enum};
///
/// state_enum! {
///     pub enum Gate {
///         Shut,
///         Ajar,
///     }
/// }
///
/// symbol_enum! {
///     pub enum Nudge {
///         Open,
///     }
/// }
///
/// fn gate() -> mailsift::Fsm<Gate, Nudge> {
///     FsmBuilder::new()
///         .states([Gate::Shut, Gate::Ajar])
///         .start(Gate::Shut)
///         .transition(Gate::Shut, Nudge::Open, Gate::Ajar)
///         .build()
///         .unwrap()
/// }
///
/// let mut machine = gate();
/// machine.step(Nudge::Open);
///
/// let json = Snapshot::capture(&machine).to_json().unwrap();
///
/// let mut resumed = gate();
/// Snapshot::from_json(&json).unwrap().restore_into(&mut resumed).unwrap();
/// assert_eq!(resumed.current_state(), &Gate::Ajar);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State, C: Symbol> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Where the cursor was
    pub current_state: S,

    /// The effective steps taken up to the capture
    pub trace: StepTrace<S, C>,
}

impl<S: State, C: Symbol> Snapshot<S, C> {
    /// Capture the current run of a machine.
    pub fn capture(machine: &Fsm<S, C>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            current_state: *machine.current_state(),
            trace: machine.trace().clone(),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Move a machine's cursor and trace to this snapshot's run.
    ///
    /// Validates the format version and that the captured state belongs to
    /// the target machine's declared state set. The target must have been
    /// built from the same table for the resumed run to make sense; that
    /// cannot be checked here, since tables are not serialized.
    pub fn restore_into(&self, machine: &mut Fsm<S, C>) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if !machine.contains_state(&self.current_state) {
            return Err(SnapshotError::ValidationFailed(format!(
                "state {} is not in the machine's state set",
                self.current_state.name()
            )));
        }

        machine.restore_run(self.current_state, self.trace.clone());
        Ok(())
    }
}
