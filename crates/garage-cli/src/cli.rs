//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use garage_types::OutputFormat;

#[derive(Parser)]
#[command(name = "smart-garage")]
#[command(version)]
#[command(about = "Vehicle fleet simulator with maintenance scheduling")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Fleet data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Vehicle kind selectable when adding
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Car,
    SportsCar,
    Truck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TurboState {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a vehicle to the garage
    Add {
        /// Kind of vehicle (car, sports-car, truck)
        #[arg(value_enum)]
        kind: KindArg,

        /// Model name
        model: String,

        /// Color
        color: String,

        /// Cargo capacity in kg (trucks only)
        #[arg(long)]
        capacity: Option<f64>,
    },

    /// List vehicles, sorted by model
    List,

    /// Show one vehicle's details and maintenance history
    Show {
        /// Vehicle ID
        vehicle_id: String,
    },

    /// Remove a vehicle (its maintenance history goes with it)
    Remove {
        /// Vehicle ID
        vehicle_id: String,
    },

    /// Start a vehicle's engine
    Start { vehicle_id: String },

    /// Stop a vehicle's engine (resets speed)
    Stop { vehicle_id: String },

    /// Increase a vehicle's speed
    Accelerate {
        vehicle_id: String,

        /// Speed increment in km/h (default 10)
        #[arg(long)]
        delta: Option<f64>,
    },

    /// Honk the horn
    Honk { vehicle_id: String },

    /// Engage or disengage a sports car's turbo
    Turbo {
        vehicle_id: String,

        #[arg(value_enum)]
        state: TurboState,
    },

    /// Load cargo onto a truck
    Load {
        vehicle_id: String,

        /// Weight in kg
        weight: f64,
    },

    /// Unload cargo from a truck
    Unload {
        vehicle_id: String,

        /// Weight in kg
        weight: f64,
    },

    /// Manage a vehicle's maintenance records
    #[command(subcommand)]
    Maintenance(MaintenanceCommands),

    /// List future maintenance appointments across the fleet
    Schedule,

    /// Show reminders for appointments inside the reminder window
    Reminders {
        /// Window in hours. Uses config value if not specified.
        #[arg(long)]
        window_hours: Option<i64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the reminder window in hours
        #[arg(long)]
        set_window_hours: Option<i64>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set the fleet data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum MaintenanceCommands {
    /// Log a past service or schedule a future one
    Add {
        /// Vehicle ID
        vehicle_id: String,

        /// Date and time (e.g. "2026-03-10 14:30")
        #[arg(long)]
        at: String,

        /// Kind of service (e.g. "Oil change")
        #[arg(long)]
        service: String,

        /// Cost in currency units
        #[arg(long)]
        cost: f64,

        /// Optional notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Remove a maintenance record
    Remove {
        /// Vehicle ID
        vehicle_id: String,

        /// Maintenance record ID
        record_id: String,
    },

    /// Show a vehicle's history, split into past and future
    History {
        /// Vehicle ID
        vehicle_id: String,
    },
}
