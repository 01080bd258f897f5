//! Command handlers

use garage_app::config::Config;
use garage_app::repository::open_fleet_store;
use garage_app::Garage;
use garage_domain::model::{MaintenanceRecord, Vehicle, VehicleAction};
use garage_domain::repository::Notifier;
use garage_store::FleetStore;
use garage_types::{Result, Severity};

use crate::cli::{Cli, Commands, KindArg, MaintenanceCommands, TurboState};
use crate::output;

/// Notification sink printing to the terminal. Warnings and errors go to
/// stderr so JSON output on stdout stays parseable.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity, _duration_ms: u64) {
        match severity {
            Severity::Warning | Severity::Error => eprintln!("[{}] {}", severity.label(), message),
            Severity::Info | Severity::Success => println!("{}", message),
        }
    }
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Config {
            show,
            set_window_hours,
            set_format,
            set_data_dir,
        } => handle_config(config, show, set_window_hours, set_format, set_data_dir),
        command => run(command, &config, format),
    }
}

fn run(command: Commands, config: &Config, format: garage_types::OutputFormat) -> Result<()> {
    let store = open_fleet_store(config)?;
    let mut garage: Garage<FleetStore, ConsoleNotifier> = Garage::open(store, ConsoleNotifier);

    match command {
        Commands::Add {
            kind,
            model,
            color,
            capacity,
        } => {
            let vehicle = match kind {
                KindArg::Car => Vehicle::new_car(&model, &color)?,
                KindArg::SportsCar => Vehicle::new_sports_car(&model, &color)?,
                KindArg::Truck => {
                    Vehicle::new_truck(&model, &color, capacity.unwrap_or(0.0))?
                }
            };
            let id = garage.add(vehicle)?;
            println!("ID: {}", id);
        }
        Commands::List => {
            output::print_vehicle_list(format, &garage.vehicles_by_model())?;
        }
        Commands::Show { vehicle_id } => {
            let view = garage.history_view(&vehicle_id)?;
            output::print_vehicle_details(format, garage.get(&vehicle_id)?, &view)?;
        }
        Commands::Remove { vehicle_id } => {
            garage.remove_by_id(&vehicle_id)?;
        }
        Commands::Start { vehicle_id } => {
            garage.perform(&vehicle_id, &VehicleAction::Start)?;
        }
        Commands::Stop { vehicle_id } => {
            garage.perform(&vehicle_id, &VehicleAction::Stop)?;
        }
        Commands::Accelerate { vehicle_id, delta } => {
            garage.perform(&vehicle_id, &VehicleAction::Accelerate { delta })?;
        }
        Commands::Honk { vehicle_id } => {
            garage.perform(&vehicle_id, &VehicleAction::Honk)?;
        }
        Commands::Turbo { vehicle_id, state } => {
            let action = match state {
                TurboState::On => VehicleAction::EngageTurbo,
                TurboState::Off => VehicleAction::DisengageTurbo,
            };
            garage.perform(&vehicle_id, &action)?;
        }
        Commands::Load { vehicle_id, weight } => {
            garage.perform(&vehicle_id, &VehicleAction::Load { weight })?;
        }
        Commands::Unload { vehicle_id, weight } => {
            garage.perform(&vehicle_id, &VehicleAction::Unload { weight })?;
        }
        Commands::Maintenance(cmd) => match cmd {
            MaintenanceCommands::Add {
                vehicle_id,
                at,
                service,
                cost,
                notes,
            } => {
                let record = MaintenanceRecord::from_input(&at, &service, cost, &notes);
                let record_id = record.id.clone();
                garage.add_maintenance(&vehicle_id, record)?;
                println!("ID: {}", record_id);
                garage.check_reminders(config.reminder_window_hours);
            }
            MaintenanceCommands::Remove {
                vehicle_id,
                record_id,
            } => {
                garage.remove_maintenance(&vehicle_id, &record_id)?;
            }
            MaintenanceCommands::History { vehicle_id } => {
                let view = garage.history_view(&vehicle_id)?;
                output::print_vehicle_details(format, garage.get(&vehicle_id)?, &view)?;
            }
        },
        Commands::Schedule => {
            output::print_schedule(format, &garage.future_appointments())?;
        }
        Commands::Reminders { window_hours } => {
            let window = window_hours.unwrap_or(config.reminder_window_hours);
            output::print_reminders(format, &garage.reminder_messages(window))?;
        }
        Commands::Config { .. } => unreachable!("handled before opening the store"),
    }

    Ok(())
}

fn handle_config(
    mut config: Config,
    show: bool,
    set_window_hours: Option<i64>,
    set_format: Option<garage_types::OutputFormat>,
    set_data_dir: Option<std::path::PathBuf>,
) -> Result<()> {
    let mut changed = false;
    if let Some(hours) = set_window_hours {
        config.reminder_window_hours = hours;
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }
    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir);
        changed = true;
    }
    if changed {
        config.save()?;
        println!("Configuration saved.");
    }
    if show || !changed {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }
    Ok(())
}
