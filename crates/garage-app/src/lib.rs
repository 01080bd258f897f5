//! Application service layer - fleet registry, config, store adapters

pub mod config;
pub mod registry;
pub mod repository;

pub use registry::Garage;
