//! Scheduling queries over the fleet's maintenance histories
//!
//! Derived views only: nothing here mutates a vehicle. Window membership
//! compares instants; reminder phrasing compares calendar days, so an
//! appointment 30 hours away on the next calendar day still says
//! "tomorrow".

use chrono::{DateTime, Duration, Utc};

use crate::model::{MaintenanceRecord, Vehicle};

/// A future maintenance record tagged with its owning vehicle
#[derive(Debug, Clone)]
pub struct UpcomingEntry {
    pub vehicle_id: String,
    pub vehicle_label: String,
    pub record: MaintenanceRecord,
}

impl UpcomingEntry {
    /// One-line summary including the vehicle label
    pub fn format(&self) -> String {
        self.record.format(Some(&self.vehicle_label))
    }
}

/// All future appointments across the fleet, nearest first
pub fn future_appointments(fleet: &[Vehicle], now: DateTime<Utc>) -> Vec<UpcomingEntry> {
    collect_after(fleet, now, None)
}

/// Appointments strictly inside `(now, now + window_hours)`, nearest first
pub fn upcoming_within(
    fleet: &[Vehicle],
    now: DateTime<Utc>,
    window_hours: i64,
) -> Vec<UpcomingEntry> {
    collect_after(fleet, now, Some(now + Duration::hours(window_hours)))
}

fn collect_after(
    fleet: &[Vehicle],
    now: DateTime<Utc>,
    limit: Option<DateTime<Utc>>,
) -> Vec<UpcomingEntry> {
    let mut entries: Vec<UpcomingEntry> = Vec::new();
    for vehicle in fleet {
        for record in vehicle.history() {
            let Some(timestamp) = record.timestamp else {
                continue;
            };
            if timestamp <= now {
                continue;
            }
            if let Some(limit) = limit {
                if timestamp >= limit {
                    continue;
                }
            }
            entries.push(UpcomingEntry {
                vehicle_id: vehicle.id.clone(),
                vehicle_label: vehicle.label(),
                record: record.clone(),
            });
        }
    }
    entries.sort_by_key(|e| e.record.timestamp);
    entries
}

/// Calendar-day classification of an appointment relative to `now`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderDay {
    Today,
    Tomorrow,
    Later,
}

pub fn classify_day(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> ReminderDay {
    let day = timestamp.date_naive();
    let today = now.date_naive();
    if day == today {
        ReminderDay::Today
    } else if day == today + Duration::days(1) {
        ReminderDay::Tomorrow
    } else {
        ReminderDay::Later
    }
}

/// Reminder messages for appointments inside the window, nearest first
pub fn reminders(fleet: &[Vehicle], now: DateTime<Utc>, window_hours: i64) -> Vec<String> {
    upcoming_within(fleet, now, window_hours)
        .into_iter()
        .filter_map(|entry| {
            let timestamp = entry.record.timestamp?;
            let time = timestamp.format("%H:%M");
            let when = match classify_day(timestamp, now) {
                ReminderDay::Today => format!("TODAY at {}", time),
                ReminderDay::Tomorrow => format!("TOMORROW at {}", time),
                ReminderDay::Later => {
                    format!("on {} at {}", timestamp.format("%a %d/%m"), time)
                }
            };
            Some(format!(
                "REMINDER: {} ({}) {}.",
                entry.record.service_type, entry.vehicle_label, when
            ))
        })
        .collect()
}
