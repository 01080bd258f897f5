//! Vehicle domain model and maintenance-scheduling services

pub mod model;
pub mod repository;
pub mod service;
