//! Maintenance record type definitions
//!
//! A record represents a single service event (past) or appointment
//! (future). Fields are frozen once the record passes validation; the only
//! edit path is removal followed by re-add.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use garage_types::{Error, Result};

/// Parse a user-supplied timestamp into an instant.
///
/// Accepts RFC 3339 plus the `YYYY-MM-DD HH:MM[:SS]` and `YYYY-MM-DDTHH:MM`
/// forms produced by datetime pickers. Unparseable input yields `None`,
/// the explicit invalid-instant sentinel (distinct from any valid date).
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n));
    }
    None
}

/// A single maintenance event or appointment owned by one vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    /// Unique ID, generated at creation (`man-` prefix)
    pub id: String,
    /// When the service happened or is scheduled. `None` = invalid input.
    pub timestamp: Option<DateTime<Utc>>,
    /// Kind of service performed (e.g. "Oil change")
    pub service_type: String,
    /// Cost in currency units. Zero is allowed (warranty work), negative is not.
    pub cost: f64,
    /// Optional free-form notes
    pub description: String,
}

/// Plain serialized form of a maintenance record.
///
/// The timestamp travels as a sortable ISO-8601 string, or `null` when the
/// in-memory record carries the invalid-instant sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceData {
    #[serde(default)]
    pub id: Option<String>,
    pub timestamp: Option<String>,
    pub service_type: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub description: String,
}

impl MaintenanceRecord {
    /// Create a record from an already-parsed instant.
    ///
    /// Construction never fails; invalid field values are surfaced by
    /// [`validate`](Self::validate) and rejected at insertion time.
    pub fn new(
        timestamp: Option<DateTime<Utc>>,
        service_type: &str,
        cost: f64,
        description: &str,
    ) -> Self {
        Self {
            id: format!("man-{}", Uuid::new_v4()),
            timestamp,
            service_type: service_type.trim().to_string(),
            cost: if cost.is_finite() { cost } else { 0.0 },
            description: description.trim().to_string(),
        }
    }

    /// Create a record from raw form input, parsing the timestamp string
    pub fn from_input(timestamp: &str, service_type: &str, cost: f64, description: &str) -> Self {
        Self::new(parse_timestamp(timestamp), service_type, cost, description)
    }

    /// Check the record against all validation rules.
    ///
    /// Returns every applicable violation, in rule order, without
    /// short-circuiting. An empty list means the record is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if self.timestamp.is_none() {
            violations.push("Invalid date.".to_string());
        }
        if self.service_type.is_empty() {
            violations.push("Service type is required.".to_string());
        }
        if self.cost < 0.0 {
            violations.push("Cost cannot be negative.".to_string());
        }
        violations
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Whether this record is scheduled after the given instant
    pub fn is_future(&self, reference: DateTime<Utc>) -> bool {
        self.timestamp.map(|t| t > reference).unwrap_or(false)
    }

    /// Human-readable one-line summary, optionally suffixed with the
    /// owning vehicle's label
    pub fn format(&self, vehicle_label: Option<&str>) -> String {
        let date = match self.timestamp {
            Some(t) => t.format("%d/%m/%Y %H:%M").to_string(),
            None => "invalid date".to_string(),
        };
        let mut line = format!(
            "{} on {} - {}",
            self.service_type,
            date,
            format_currency(self.cost)
        );
        if !self.description.is_empty() {
            line.push_str(&format!(" ({})", self.description));
        }
        if let Some(label) = vehicle_label {
            line.push_str(&format!(" [vehicle: {}]", label));
        }
        line
    }

    /// Plain-data form for persistence
    pub fn to_data(&self) -> MaintenanceData {
        MaintenanceData {
            id: Some(self.id.clone()),
            timestamp: self.timestamp.map(|t| t.to_rfc3339()),
            service_type: self.service_type.clone(),
            cost: self.cost,
            description: self.description.clone(),
        }
    }

    /// Rebuild a record from its plain-data form.
    ///
    /// A missing or unparseable timestamp string becomes the invalid
    /// sentinel rather than an error; a blank service type is a hard
    /// rehydration failure since nothing useful can be displayed for it.
    pub fn from_data(data: MaintenanceData) -> Result<Self> {
        if data.service_type.trim().is_empty() {
            return Err(Error::Rehydration(
                "maintenance record has no service type".to_string(),
            ));
        }
        let mut record = Self::new(
            data.timestamp.as_deref().and_then(parse_timestamp),
            &data.service_type,
            data.cost,
            &data.description,
        );
        if let Some(id) = data.id {
            record.id = id;
        }
        Ok(record)
    }
}

/// Format a cost the way the original garage did: `R$ 1.234,56`
pub(crate) fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;
    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{}R$ {},{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2026-03-10T14:30:00Z").is_some());
        assert!(parse_timestamp("2026-03-10 14:30").is_some());
        assert!(parse_timestamp("2026-03-10T14:30").is_some());
        assert!(parse_timestamp("2026-03-10").is_some());
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_epoch_is_distinct_from_invalid() {
        let epoch = parse_timestamp("1970-01-01T00:00:00Z");
        assert_eq!(epoch, Some(Utc.timestamp_opt(0, 0).unwrap()));
        assert_ne!(epoch, None);
    }

    #[test]
    fn test_valid_record_has_no_violations() {
        let record = MaintenanceRecord::from_input("2026-03-10 14:30", "Oil change", 150.0, "");
        assert!(record.validate().is_empty());
    }

    #[test]
    fn test_all_violations_reported() {
        let record = MaintenanceRecord::from_input("garbage", "   ", -10.0, "");
        let violations = record.validate();
        assert_eq!(violations.len(), 3);
        assert!(violations[0].contains("date"));
        assert!(violations[1].contains("Service type"));
        assert!(violations[2].contains("negative"));
    }

    #[test]
    fn test_zero_cost_is_valid() {
        let record = MaintenanceRecord::from_input("2026-03-10 14:30", "Warranty fix", 0.0, "");
        assert!(record.is_valid());
    }

    #[test]
    fn test_is_future() {
        let now = parse_timestamp("2026-03-10 12:00").unwrap();
        let past = MaintenanceRecord::from_input("2026-03-09 12:00", "Brakes", 50.0, "");
        let future = MaintenanceRecord::from_input("2026-03-11 12:00", "Brakes", 50.0, "");
        let invalid = MaintenanceRecord::from_input("bogus", "Brakes", 50.0, "");
        assert!(!past.is_future(now));
        assert!(future.is_future(now));
        assert!(!invalid.is_future(now));
    }

    #[test]
    fn test_format_includes_fields() {
        let record =
            MaintenanceRecord::from_input("2026-03-10 14:30", "Oil change", 1234.5, "synthetic");
        let line = record.format(Some("Fusca (blue)"));
        assert!(line.contains("Oil change"));
        assert!(line.contains("10/03/2026 14:30"));
        assert!(line.contains("R$ 1.234,50"));
        assert!(line.contains("(synthetic)"));
        assert!(line.contains("[vehicle: Fusca (blue)]"));
    }

    #[test]
    fn test_format_invalid_date() {
        let record = MaintenanceRecord::from_input("bogus", "Oil change", 10.0, "");
        assert!(record.format(None).contains("invalid date"));
    }

    #[test]
    fn test_data_round_trip() {
        let record =
            MaintenanceRecord::from_input("2026-03-10 14:30", "Oil change", 150.0, "notes");
        let back = MaintenanceRecord::from_data(record.to_data()).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.timestamp, record.timestamp);
        assert_eq!(back.service_type, record.service_type);
        assert_eq!(back.cost, record.cost);
        assert_eq!(back.description, record.description);
    }

    #[test]
    fn test_invalid_timestamp_serializes_as_null() {
        let record = MaintenanceRecord::from_input("bogus", "Oil change", 10.0, "");
        let data = record.to_data();
        assert!(data.timestamp.is_none());
        let back = MaintenanceRecord::from_data(data).unwrap();
        assert!(back.timestamp.is_none());
    }

    #[test]
    fn test_from_data_rejects_blank_service_type() {
        let data = MaintenanceData {
            id: None,
            timestamp: Some("2026-03-10T14:30:00Z".to_string()),
            service_type: "  ".to_string(),
            cost: 10.0,
            description: String::new(),
        };
        assert!(MaintenanceRecord::from_data(data).is_err());
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(150.0), "R$ 150,00");
        assert_eq!(format_currency(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_currency(-10.0), "-R$ 10,00");
    }
}
