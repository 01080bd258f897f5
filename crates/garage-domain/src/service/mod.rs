//! Domain services

pub mod schedule;

pub use schedule::{
    classify_day, future_appointments, reminders, upcoming_within, ReminderDay, UpcomingEntry,
};
