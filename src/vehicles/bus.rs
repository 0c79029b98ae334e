//! Bus kind with a capacity-bounded passenger roster.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{Engine, Motion, VehicleIdentity};
use crate::vehicles::{Mobile, Vehicle};

/// Outcome of asking a passenger to board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardingOutcome {
    /// The passenger was appended to the roster.
    Boarded {
        /// Passenger name.
        name: String,
    },
    /// The roster is at capacity; nothing changed.
    CapacityFull {
        /// The bus capacity.
        capacity: usize,
    },
}

impl fmt::Display for BoardingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardingOutcome::Boarded { name } => write!(f, "{} boarded the bus.", name),
            BoardingOutcome::CapacityFull { .. } => f.write_str("The bus is full."),
        }
    }
}

/// Outcome of asking a passenger to get off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlightingOutcome {
    /// The first matching passenger left the roster.
    Alighted {
        /// Passenger name.
        name: String,
    },
    /// No passenger with that name is aboard.
    NotAboard {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for AlightingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlightingOutcome::Alighted { name } => write!(f, "{} got off the bus.", name),
            AlightingOutcome::NotAboard { name } => write!(f, "{} is not on this bus.", name),
        }
    }
}

/// Outcome of a repaint request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepaintOutcome {
    /// The color was changed.
    Repainted {
        /// The new color.
        color: String,
    },
    /// The requested color matched the current one; nothing changed.
    Unchanged,
}

impl fmt::Display for RepaintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepaintOutcome::Repainted { color } => write!(f, "Color changed to {}.", color),
            RepaintOutcome::Unchanged => f.write_str("Color is already the same."),
        }
    }
}

/// Outcome of an engine tuning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuneOutcome {
    /// The engine rating was raised.
    Tuned {
        /// The new rating in HP.
        horsepower: i32,
    },
    /// The increment was not strictly positive; the engine is untouched.
    InvalidIncrement,
}

impl fmt::Display for TuneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuneOutcome::Tuned { horsepower } => {
                write!(f, "Horsepower increased to {}.", horsepower)
            }
            TuneOutcome::InvalidIncrement => f.write_str("Invalid horsepower increment."),
        }
    }
}

/// A bus carrying named passengers up to a fixed capacity.
///
/// Roster operations report outcomes as values rather than erroring: a
/// full bus or an unknown passenger is an expected business result, not a
/// usage error.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Engine;
/// use u_fleet::vehicles::{BoardingOutcome, Bus};
///
/// let engine = Engine::new(280, "4-stroke").unwrap();
/// let mut bus = Bus::new("MAN", "Lion's City", 2017, "diesel", "Blue", 50, engine).unwrap();
///
/// let outcome = bus.add_passenger("Luka");
/// assert_eq!(outcome, BoardingOutcome::Boarded { name: "Luka".into() });
/// assert_eq!(bus.passengers(), ["Luka"]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Bus {
    identity: VehicleIdentity,
    engine: Engine,
    motion: Motion,
    color: String,
    capacity: usize,
    passengers: Vec<String>,
}

impl Bus {
    /// Creates a bus with an empty passenger roster.
    ///
    /// Identity fields are validated in the shared fixed order, then the
    /// capacity must be at least one seat.
    pub fn new(
        brand: &str,
        model: &str,
        year: i32,
        fuel_type: &str,
        color: &str,
        capacity: usize,
        engine: Engine,
    ) -> Result<Self, ValidationError> {
        let identity = VehicleIdentity::new(brand, model, year, fuel_type)?;
        if capacity == 0 {
            return Err(ValidationError::NotPositive {
                field: "capacity",
                value: 0.0,
            });
        }
        Ok(Self {
            identity,
            engine,
            motion: Motion::new(),
            color: color.to_string(),
            capacity,
            passengers: Vec::new(),
        })
    }

    /// Boards a passenger, preserving insertion order.
    ///
    /// Duplicate names are allowed. A full bus reports
    /// [`BoardingOutcome::CapacityFull`] and leaves the roster unchanged.
    pub fn add_passenger(&mut self, name: &str) -> BoardingOutcome {
        if self.passengers.len() < self.capacity {
            self.passengers.push(name.to_string());
            BoardingOutcome::Boarded {
                name: name.to_string(),
            }
        } else {
            BoardingOutcome::CapacityFull {
                capacity: self.capacity,
            }
        }
    }

    /// Removes the first passenger with the given name, if aboard.
    pub fn remove_passenger(&mut self, name: &str) -> AlightingOutcome {
        match self.passengers.iter().position(|p| p == name) {
            Some(index) => {
                self.passengers.remove(index);
                AlightingOutcome::Alighted {
                    name: name.to_string(),
                }
            }
            None => AlightingOutcome::NotAboard {
                name: name.to_string(),
            },
        }
    }

    /// Repaints the bus, reporting a same-color request as a no-op.
    pub fn change_color(&mut self, new_color: &str) -> RepaintOutcome {
        if new_color == self.color {
            return RepaintOutcome::Unchanged;
        }
        self.color = new_color.to_string();
        RepaintOutcome::Repainted {
            color: new_color.to_string(),
        }
    }

    /// Raises the owned engine's rating by `delta` HP.
    ///
    /// Delegates to the engine; a non-positive increment leaves it
    /// untouched and reports [`TuneOutcome::InvalidIncrement`].
    pub fn increase_horse_power(&mut self, delta: i32) -> TuneOutcome {
        match self.engine.add_horsepower(delta) {
            Some(horsepower) => TuneOutcome::Tuned { horsepower },
            None => TuneOutcome::InvalidIncrement,
        }
    }

    /// Reports the speed at the moment the engine stops.
    ///
    /// Stopping the engine does not brake; speed is left as-is.
    pub fn stop_engine(&self) -> String {
        format!(
            "{} engine stopped at {} km/h.",
            self.identity,
            self.motion.speed()
        )
    }

    /// Current color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Seat capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Passenger names in boarding order.
    pub fn passengers(&self) -> &[String] {
        &self.passengers
    }
}

impl Vehicle for Bus {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn vehicle_type(&self) -> &'static str {
        "Bus"
    }

    fn display_info(&self) -> String {
        let roster = if self.passengers.is_empty() {
            "No passengers".to_string()
        } else {
            self.passengers.join(", ")
        };
        format!(
            "Vehicle: {}\nType: {}\nColor: {}\nEngine: {}\nCapacity: {}\nPassengers: {} / {}\nPassenger List: {}\nOdometer: {:.1} km\nSpeed: {} km/h\nVIN: {}\n",
            self.identity,
            self.vehicle_type(),
            self.color,
            self.engine,
            self.capacity,
            self.passengers.len(),
            self.capacity,
            roster,
            self.motion.odometer(),
            self.motion.speed(),
            self.identity.vin(),
        )
    }
}

impl Mobile for Bus {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_bus(capacity: usize) -> Bus {
        let engine = Engine::new(280, "4-stroke").expect("valid");
        Bus::new("MAN", "Lion's City", 2017, "diesel", "Blue", capacity, engine).expect("valid")
    }

    #[test]
    fn test_bus_new() {
        let bus = city_bus(50);
        assert_eq!(bus.vehicle_type(), "Bus");
        assert_eq!(bus.color(), "Blue");
        assert_eq!(bus.capacity(), 50);
        assert!(bus.passengers().is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let engine = Engine::new(280, "4-stroke").expect("valid");
        let err = Bus::new("MAN", "Lion's City", 2017, "diesel", "Blue", 0, engine)
            .expect_err("no seats");
        assert!(matches!(err, ValidationError::NotPositive { field: "capacity", .. }));
    }

    #[test]
    fn test_identity_errors_surface_before_capacity() {
        let engine = Engine::new(280, "4-stroke").expect("valid");
        let err =
            Bus::new("", "Lion's City", 2017, "diesel", "Blue", 0, engine).expect_err("invalid");
        assert_eq!(err, ValidationError::EmptyField { field: "brand" });
    }

    #[test]
    fn test_capacity_bound() {
        let mut bus = city_bus(1);
        assert_eq!(
            bus.add_passenger("A"),
            BoardingOutcome::Boarded { name: "A".into() }
        );
        assert_eq!(
            bus.add_passenger("B"),
            BoardingOutcome::CapacityFull { capacity: 1 }
        );
        assert_eq!(bus.passengers(), ["A"]);
    }

    #[test]
    fn test_roster_order_and_duplicates() {
        let mut bus = city_bus(5);
        bus.add_passenger("Luka");
        bus.add_passenger("Giorgi");
        bus.add_passenger("Luka");
        assert_eq!(bus.passengers(), ["Luka", "Giorgi", "Luka"]);

        // Only the first match leaves.
        assert_eq!(
            bus.remove_passenger("Luka"),
            AlightingOutcome::Alighted { name: "Luka".into() }
        );
        assert_eq!(bus.passengers(), ["Giorgi", "Luka"]);
    }

    #[test]
    fn test_remove_unknown_passenger() {
        let mut bus = city_bus(5);
        bus.add_passenger("Luka");
        assert_eq!(
            bus.remove_passenger("Nino"),
            AlightingOutcome::NotAboard { name: "Nino".into() }
        );
        assert_eq!(bus.passengers(), ["Luka"]);
    }

    #[test]
    fn test_change_color() {
        let mut bus = city_bus(5);
        assert_eq!(bus.change_color("Blue"), RepaintOutcome::Unchanged);
        assert_eq!(bus.color(), "Blue");
        assert_eq!(
            bus.change_color("Yellow"),
            RepaintOutcome::Repainted { color: "Yellow".into() }
        );
        assert_eq!(bus.color(), "Yellow");
    }

    #[test]
    fn test_increase_horse_power() {
        let mut bus = city_bus(5);
        assert_eq!(
            bus.increase_horse_power(50),
            TuneOutcome::Tuned { horsepower: 330 }
        );
        assert_eq!(bus.engine().horsepower(), 330);

        assert_eq!(bus.increase_horse_power(0), TuneOutcome::InvalidIncrement);
        assert_eq!(bus.increase_horse_power(-20), TuneOutcome::InvalidIncrement);
        assert_eq!(bus.engine().horsepower(), 330);
    }

    #[test]
    fn test_stop_engine_reports_current_speed() {
        let mut bus = city_bus(5);
        bus.accelerate(40).expect("valid");
        assert_eq!(
            bus.stop_engine(),
            "2017 MAN Lion's City (diesel) engine stopped at 40 km/h."
        );
        // Stopping the engine is not braking.
        assert_eq!(bus.speed(), 40);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            BoardingOutcome::Boarded { name: "Luka".into() }.to_string(),
            "Luka boarded the bus."
        );
        assert_eq!(
            BoardingOutcome::CapacityFull { capacity: 1 }.to_string(),
            "The bus is full."
        );
        assert_eq!(
            AlightingOutcome::NotAboard { name: "Nino".into() }.to_string(),
            "Nino is not on this bus."
        );
        assert_eq!(
            RepaintOutcome::Repainted { color: "Yellow".into() }.to_string(),
            "Color changed to Yellow."
        );
        assert_eq!(
            TuneOutcome::Tuned { horsepower: 330 }.to_string(),
            "Horsepower increased to 330."
        );
    }

    #[test]
    fn test_bus_is_mobile() {
        let mut bus = city_bus(5);
        bus.accelerate(40).expect("valid");
        let report = bus.drive(60.0).expect("valid");
        assert!(report.contains("drove 60 km"));
        assert_eq!(bus.speed(), 40);
        assert_eq!(bus.odometer(), 60.0);
        bus.brake();
        assert_eq!(bus.speed(), 0);
    }

    #[test]
    fn test_display_info() {
        let mut bus = city_bus(50);
        let info = bus.display_info();
        assert!(info.contains("Type: Bus"));
        assert!(info.contains("Passengers: 0 / 50"));
        assert!(info.contains("Passenger List: No passengers"));

        bus.add_passenger("Luka");
        bus.add_passenger("Giorgi");
        let info = bus.display_info();
        assert!(info.contains("Passengers: 2 / 50"));
        assert!(info.contains("Passenger List: Luka, Giorgi"));
    }
}
