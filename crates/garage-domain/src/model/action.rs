//! Vehicle command dispatch
//!
//! UI-style actions are named commands resolved through the shared vehicle
//! behavior surface instead of runtime type inspection. Unsupported
//! combinations (turbo on a plain car, cargo on a coupe) surface as
//! precondition failures from the vehicle itself.

use garage_types::Result;

use super::vehicle::Vehicle;

/// An operation a user can invoke on a vehicle
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleAction {
    Start,
    Stop,
    Accelerate { delta: Option<f64> },
    Honk,
    EngageTurbo,
    DisengageTurbo,
    Load { weight: f64 },
    Unload { weight: f64 },
}

impl VehicleAction {
    /// Whether a successful run of this action changes vehicle state
    /// (and therefore must be followed by a persistence write)
    pub fn mutates_state(&self) -> bool {
        !matches!(self, VehicleAction::Honk)
    }
}

impl Vehicle {
    /// Run an action against this vehicle, returning the user-facing
    /// outcome message
    pub fn apply(&mut self, action: &VehicleAction) -> Result<String> {
        match action {
            VehicleAction::Start => self.start(),
            VehicleAction::Stop => self.stop(),
            VehicleAction::Accelerate { delta } => self.accelerate(*delta),
            VehicleAction::Honk => Ok(self.honk()),
            VehicleAction::EngageTurbo => self.engage_turbo(),
            VehicleAction::DisengageTurbo => self.disengage_turbo(),
            VehicleAction::Load { weight } => self.load(*weight),
            VehicleAction::Unload { weight } => self.unload(*weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_routes_to_kind_behavior() {
        let mut sports = Vehicle::new_sports_car("Ferrari", "red").unwrap();
        sports.apply(&VehicleAction::Start).unwrap();
        sports.apply(&VehicleAction::EngageTurbo).unwrap();
        assert!(sports.apply(&VehicleAction::Load { weight: 100.0 }).is_err());
    }

    #[test]
    fn test_honk_is_the_only_non_mutating_action() {
        assert!(!VehicleAction::Honk.mutates_state());
        assert!(VehicleAction::Start.mutates_state());
        assert!(VehicleAction::Accelerate { delta: None }.mutates_state());
        assert!(VehicleAction::Load { weight: 1.0 }.mutates_state());
    }
}
