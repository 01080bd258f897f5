//! Domain model types

pub mod action;
pub mod maintenance;
pub mod vehicle;

pub use action::VehicleAction;
pub use maintenance::{parse_timestamp, MaintenanceData, MaintenanceRecord};
pub use vehicle::{
    HistoryView, MaintenanceLabel, Vehicle, VehicleKind, VehicleRecord, DEFAULT_ACCELERATION,
};
