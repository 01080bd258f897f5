//! Output formatting module

use serde_json::json;

use garage_domain::model::{HistoryView, MaintenanceRecord, Vehicle};
use garage_domain::service::UpcomingEntry;
use garage_types::{OutputFormat, Result};

pub fn print_vehicle_list(format: OutputFormat, vehicles: &[&Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        let records: Vec<_> = vehicles.iter().map(|v| v.to_record()).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    if vehicles.is_empty() {
        println!("Garage is empty. Add a vehicle!");
        return Ok(());
    }
    for vehicle in vehicles {
        println!(
            "{} [{}] - color: {} ({})",
            vehicle.model,
            vehicle.kind.tag(),
            vehicle.color,
            vehicle.id
        );
    }
    Ok(())
}

pub fn print_vehicle_details(
    format: OutputFormat,
    vehicle: &Vehicle,
    view: &HistoryView,
) -> Result<()> {
    if format == OutputFormat::Json {
        let content = json!({
            "vehicle": vehicle.to_record(),
            "history": {
                "past": data_of(&view.past),
                "future": data_of(&view.future),
                "invalid": view.invalid,
            },
        });
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    for line in vehicle.summary_lines() {
        println!("{}", line);
    }

    if view.is_empty() {
        println!("\nNo maintenance records.");
        return Ok(());
    }
    if view.past.is_empty() && view.future.is_empty() {
        println!("\nNo valid maintenance records found.");
        return Ok(());
    }

    if !view.past.is_empty() {
        println!("\nPast history");
        println!("------------");
        for record in &view.past {
            println!("{}  ({})", record.format(None), record.id);
        }
    }
    if !view.future.is_empty() {
        println!("\nFuture appointments");
        println!("-------------------");
        for record in &view.future {
            println!("{}  ({})", record.format(None), record.id);
        }
    }
    if view.invalid > 0 {
        println!("\n{} record(s) with an invalid date were skipped.", view.invalid);
    }
    Ok(())
}

pub fn print_schedule(format: OutputFormat, entries: &[UpcomingEntry]) -> Result<()> {
    if format == OutputFormat::Json {
        let content: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "vehicleId": e.vehicle_id,
                    "vehicleLabel": e.vehicle_label,
                    "record": e.record.to_data(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No future appointments.");
        return Ok(());
    }
    for entry in entries {
        println!("{}  ({})", entry.format(), entry.record.id);
    }
    Ok(())
}

pub fn print_reminders(format: OutputFormat, messages: &[String]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }
    if messages.is_empty() {
        println!("No upcoming maintenance inside the window.");
        return Ok(());
    }
    for message in messages {
        println!("{}", message);
    }
    Ok(())
}

fn data_of(records: &[MaintenanceRecord]) -> Vec<garage_domain::model::MaintenanceData> {
    records.iter().map(|r| r.to_data()).collect()
}
