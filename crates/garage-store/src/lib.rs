//! Persistent store for the garage fleet
//!
//! One JSON blob (`garage.json`) holding an array of plain vehicle
//! records. Saving rewrites the whole blob; loading rehydrates each record
//! individually and drops the ones that fail instead of aborting the load.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use garage_domain::model::{Vehicle, VehicleRecord};
use garage_domain::repository::{FleetPersistence, LoadReport};
use garage_types::{Error, Result};

/// File-based implementation of [`FleetPersistence`]
pub struct FleetStore {
    store_path: PathBuf,
}

impl FleetStore {
    /// Create or open a store rooted at the given directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join("garage.json"),
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.store_path
    }
}

impl FleetPersistence for FleetStore {
    fn save(&self, fleet: &[Vehicle]) -> Result<()> {
        let records: Vec<VehicleRecord> = fleet.iter().map(|v| v.to_record()).collect();
        let file = File::create(&self.store_path)
            .map_err(|e| Error::Persistence(e.to_string()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &records)
            .map_err(|e| Error::Persistence(e.to_string()))?;
        Ok(())
    }

    fn load(&self) -> Result<LoadReport> {
        if !self.store_path.exists() {
            return Ok(LoadReport::default());
        }
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        let raw: Vec<serde_json::Value> = serde_json::from_reader(reader)?;

        let mut report = LoadReport::default();
        for value in raw {
            match serde_json::from_value::<VehicleRecord>(value) {
                Ok(record) => {
                    let (vehicle, dropped) = Vehicle::from_record(record);
                    report.dropped_records += dropped;
                    report.vehicles.push(vehicle);
                }
                Err(_) => report.dropped_vehicles += 1,
            }
        }
        Ok(report)
    }
}
