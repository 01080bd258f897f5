//! End-to-end flow: registry + file store across process restarts

use tempfile::tempdir;

use garage_app::repository::open_fleet_store_at;
use garage_app::Garage;
use garage_domain::model::{MaintenanceRecord, Vehicle, VehicleAction, VehicleKind};
use garage_domain::repository::Notifier;
use garage_types::Severity;

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str, _severity: Severity, _duration_ms: u64) {}
}

#[test]
fn test_garage_survives_restart() {
    let dir = tempdir().unwrap();

    let store = open_fleet_store_at(dir.path().to_path_buf()).unwrap();
    let mut garage = Garage::open(store, SilentNotifier);

    let truck_id = garage
        .add(Vehicle::new_truck("Scania", "white", 5000.0).unwrap())
        .unwrap();
    garage.perform(&truck_id, &VehicleAction::Start).unwrap();
    garage
        .perform(&truck_id, &VehicleAction::Load { weight: 3000.0 })
        .unwrap();
    let record_id = {
        let record =
            MaintenanceRecord::from_input("2030-06-01 09:00", "Brake check", 420.0, "front axle");
        let id = record.id.clone();
        garage.add_maintenance(&truck_id, record).unwrap();
        id
    };

    // simulate a fresh process against the same data directory
    let store = open_fleet_store_at(dir.path().to_path_buf()).unwrap();
    let garage = Garage::open(store, SilentNotifier);

    let truck = garage.get(&truck_id).unwrap();
    assert!(truck.is_running);
    assert_eq!(
        truck.kind,
        VehicleKind::Truck {
            cargo_capacity: 5000.0,
            current_load: 3000.0
        }
    );
    assert_eq!(truck.history().len(), 1);
    assert_eq!(truck.history()[0].id, record_id);

    let appointments = garage.future_appointments();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].vehicle_id, truck_id);
    assert_eq!(appointments[0].record.service_type, "Brake check");
}

#[test]
fn test_remove_is_persisted_immediately() {
    let dir = tempdir().unwrap();

    let store = open_fleet_store_at(dir.path().to_path_buf()).unwrap();
    let mut garage = Garage::open(store, SilentNotifier);
    let id = garage
        .add(Vehicle::new_car("Fusca", "blue").unwrap())
        .unwrap();
    garage
        .add(Vehicle::new_sports_car("Ferrari", "red").unwrap())
        .unwrap();
    garage.remove_by_id(&id).unwrap();

    let store = open_fleet_store_at(dir.path().to_path_buf()).unwrap();
    let garage = Garage::open(store, SilentNotifier);
    assert_eq!(garage.vehicles().len(), 1);
    assert_eq!(garage.vehicles()[0].model, "Ferrari");
}
