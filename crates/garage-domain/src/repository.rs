//! Collaborator trait definitions
//!
//! The registry mutates the fleet in memory and delegates persistence and
//! user feedback to these injected collaborators.

use garage_types::{Result, Severity};

use crate::model::Vehicle;

/// Outcome of loading the persisted fleet. Records that fail rehydration
/// are dropped and counted; the load itself still succeeds.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub vehicles: Vec<Vehicle>,
    /// Persisted vehicle records that could not be rehydrated
    pub dropped_vehicles: usize,
    /// Nested maintenance records dropped across all loaded vehicles
    pub dropped_records: usize,
}

impl LoadReport {
    pub fn anything_dropped(&self) -> bool {
        self.dropped_vehicles > 0 || self.dropped_records > 0
    }
}

/// Save/load contract for the whole fleet
pub trait FleetPersistence {
    /// Write the full fleet as one blob. Called synchronously after every
    /// successful mutation.
    fn save(&self, fleet: &[Vehicle]) -> Result<()>;

    /// Read the persisted fleet. Absence of stored data is an empty
    /// report, not an error.
    fn load(&self) -> Result<LoadReport>;
}

/// User-facing notification sink. `duration_ms` of zero means the message
/// should not auto-dismiss.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity, duration_ms: u64);
}
