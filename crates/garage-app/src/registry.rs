//! Fleet registry
//!
//! Owns every vehicle in the garage and coordinates the injected
//! persistence and notification collaborators. Every successful mutation
//! is followed by a synchronous save; if the save fails the in-memory
//! state is kept as the source of truth and the failure is surfaced as a
//! non-dismissing warning.

use chrono::Utc;

use garage_domain::model::{
    HistoryView, MaintenanceLabel, MaintenanceRecord, Vehicle, VehicleAction,
};
use garage_domain::repository::{FleetPersistence, Notifier};
use garage_domain::service::{self, UpcomingEntry};
use garage_types::{Error, Result, Severity};

pub struct Garage<P, N> {
    vehicles: Vec<Vehicle>,
    store: P,
    notifier: N,
}

impl<P: FleetPersistence, N: Notifier> Garage<P, N> {
    /// Load the persisted fleet and build the registry.
    ///
    /// Per-record rehydration failures are surfaced as one aggregate
    /// warning; a completely unreadable blob starts an empty garage
    /// instead of failing the process.
    pub fn open(store: P, notifier: N) -> Self {
        let vehicles = match store.load() {
            Ok(report) => {
                if report.anything_dropped() {
                    notifier.notify(
                        &format!(
                            "Warning: {} vehicle(s) and {} maintenance record(s) could not be loaded and were skipped.",
                            report.dropped_vehicles, report.dropped_records
                        ),
                        Severity::Warning,
                        5000,
                    );
                }
                report.vehicles
            }
            Err(e) => {
                notifier.notify(
                    &format!("Failed to load garage data ({}). Starting empty.", e),
                    Severity::Error,
                    5000,
                );
                Vec::new()
            }
        };
        Self {
            vehicles,
            store,
            notifier,
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Display order: sorted by model name. Derived at call time, not a
    /// stored invariant.
    pub fn vehicles_by_model(&self) -> Vec<&Vehicle> {
        let mut vehicles: Vec<_> = self.vehicles.iter().collect();
        vehicles.sort_by(|a, b| a.model.cmp(&b.model));
        vehicles
    }

    pub fn get(&self, vehicle_id: &str) -> Result<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id == vehicle_id)
            .ok_or_else(|| Error::NotFound(format!("vehicle {}", vehicle_id)))
    }

    fn get_mut(&mut self, vehicle_id: &str) -> Result<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.id == vehicle_id)
            .ok_or_else(|| Error::NotFound(format!("vehicle {}", vehicle_id)))
    }

    /// Add a vehicle to the garage. IDs must be unique within the fleet.
    pub fn add(&mut self, vehicle: Vehicle) -> Result<String> {
        if self.vehicles.iter().any(|v| v.id == vehicle.id) {
            return Err(Error::validation(format!(
                "A vehicle with id {} already exists.",
                vehicle.id
            )));
        }
        let model = vehicle.model.clone();
        let id = vehicle.id.clone();
        self.vehicles.push(vehicle);
        self.persist();
        self.notifier
            .notify(&format!("Vehicle {} added!", model), Severity::Success, 5000);
        Ok(id)
    }

    /// Remove a vehicle. Its entire maintenance history goes with it.
    pub fn remove_by_id(&mut self, vehicle_id: &str) -> Result<Vehicle> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v.id == vehicle_id)
            .ok_or_else(|| Error::NotFound(format!("vehicle {}", vehicle_id)))?;
        let vehicle = self.vehicles.remove(index);
        self.persist();
        self.notifier.notify(
            &format!("Vehicle {} removed.", vehicle.model),
            Severity::Success,
            5000,
        );
        Ok(vehicle)
    }

    /// Run a named action against a vehicle. Persists after any
    /// state-mutating success.
    pub fn perform(&mut self, vehicle_id: &str, action: &VehicleAction) -> Result<String> {
        let vehicle = self.get_mut(vehicle_id)?;
        let message = vehicle.apply(action)?;
        if action.mutates_state() {
            self.persist();
        }
        self.notifier.notify(&message, Severity::Info, 5000);
        Ok(message)
    }

    /// Validate and insert a maintenance record into a vehicle's history
    pub fn add_maintenance(
        &mut self,
        vehicle_id: &str,
        record: MaintenanceRecord,
    ) -> Result<MaintenanceLabel> {
        let vehicle = self.get_mut(vehicle_id)?;
        let service_type = record.service_type.clone();
        let model = vehicle.model.clone();
        let label = vehicle.add_maintenance(record, Utc::now())?;
        self.persist();
        self.notifier.notify(
            &format!(
                "Maintenance ({}) {} for {}.",
                service_type,
                label.word(),
                model
            ),
            Severity::Success,
            5000,
        );
        Ok(label)
    }

    /// Remove one maintenance record from a vehicle's history
    pub fn remove_maintenance(&mut self, vehicle_id: &str, record_id: &str) -> Result<()> {
        let vehicle = self.get_mut(vehicle_id)?;
        if !vehicle.remove_maintenance_by_id(record_id) {
            return Err(Error::NotFound(format!(
                "maintenance record {}",
                record_id
            )));
        }
        self.persist();
        self.notifier.notify(
            "Maintenance record removed.",
            Severity::Success,
            5000,
        );
        Ok(())
    }

    /// Past/future partition of one vehicle's history, as of now
    pub fn history_view(&self, vehicle_id: &str) -> Result<HistoryView> {
        Ok(self.get(vehicle_id)?.history_view(Utc::now()))
    }

    /// All future appointments across the fleet, nearest first
    pub fn future_appointments(&self) -> Vec<UpcomingEntry> {
        service::future_appointments(&self.vehicles, Utc::now())
    }

    /// Appointments inside the reminder window, nearest first
    pub fn upcoming(&self, window_hours: i64) -> Vec<UpcomingEntry> {
        service::upcoming_within(&self.vehicles, Utc::now(), window_hours)
    }

    /// Reminder messages for appointments inside the window
    pub fn reminder_messages(&self, window_hours: i64) -> Vec<String> {
        service::reminders(&self.vehicles, Utc::now(), window_hours)
    }

    /// Surface reminders for appointments inside the window
    pub fn check_reminders(&self, window_hours: i64) {
        let messages = self.reminder_messages(window_hours);
        if !messages.is_empty() {
            self.notifier
                .notify(&messages.join("\n"), Severity::Warning, 10000);
        }
    }

    /// Write the fleet out. A failed write is reported but never rolls
    /// back the in-memory mutation; memory stays authoritative for the
    /// rest of the session.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.vehicles) {
            self.notifier.notify(
                &format!("Failed to save garage data: {}. Changes are kept in memory only.", e),
                Severity::Error,
                0,
            );
        }
    }
}
