//! Store adapters for the persistence layer

use std::path::PathBuf;

use garage_store::FleetStore;
use garage_types::Result;

use crate::config::Config;

/// Open the file-based fleet store at the configured data directory
pub fn open_fleet_store(config: &Config) -> Result<FleetStore> {
    FleetStore::open(config.store_dir()?)
}

/// Open the fleet store at a custom directory
pub fn open_fleet_store_at(store_dir: PathBuf) -> Result<FleetStore> {
    FleetStore::open(store_dir)
}
