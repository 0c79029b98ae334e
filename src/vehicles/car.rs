//! Car kind and the process-wide production counter.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{Engine, Motion, VehicleIdentity};
use crate::vehicles::{Mobile, Vehicle};

/// Cars produced in this process, including sports cars.
///
/// Zero at program start; incremented exactly once per successfully
/// constructed instance, never decremented.
static MODELS_PRODUCED: AtomicU64 = AtomicU64::new(0);

/// A car with a mutable license plate.
///
/// Every successful construction (including [`SportsCar`]) counts toward
/// [`Car::models_produced`].
///
/// [`SportsCar`]: crate::vehicles::SportsCar
///
/// # Examples
///
/// ```
/// use u_fleet::models::Engine;
/// use u_fleet::vehicles::Car;
///
/// let engine = Engine::new(150, "4-stroke").unwrap();
/// let mut car = Car::new("BMW", "M3", 2022, "petrol", engine, "Red", 4, "ABC-123").unwrap();
/// assert_eq!(car.license_plate(), "ABC-123");
///
/// car.set_license_plate("XYZ-999");
/// assert_eq!(car.license_plate(), "XYZ-999");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Car {
    identity: VehicleIdentity,
    engine: Engine,
    motion: Motion,
    color: String,
    num_doors: u32,
    license_plate: String,
}

impl Car {
    /// Creates a car and counts it toward the production counter.
    ///
    /// Identity fields are validated in the shared fixed order, then the
    /// door count must be at least one. The counter is only touched after
    /// every check passes, so failed constructions are never counted.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand: &str,
        model: &str,
        year: i32,
        fuel_type: &str,
        engine: Engine,
        color: &str,
        num_doors: u32,
        license_plate: &str,
    ) -> Result<Self, ValidationError> {
        let identity = VehicleIdentity::new(brand, model, year, fuel_type)?;
        if num_doors == 0 {
            return Err(ValidationError::NotPositive {
                field: "doors",
                value: 0.0,
            });
        }
        MODELS_PRODUCED.fetch_add(1, Ordering::Relaxed);
        Ok(Self {
            identity,
            engine,
            motion: Motion::new(),
            color: color.to_string(),
            num_doors,
            license_plate: license_plate.to_string(),
        })
    }

    /// Number of cars (including sports cars) produced process-wide.
    pub fn models_produced() -> u64 {
        MODELS_PRODUCED.load(Ordering::Relaxed)
    }

    /// Current license plate.
    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    /// Replaces the license plate. No format validation is applied.
    pub fn set_license_plate(&mut self, plate: &str) {
        self.license_plate = plate.to_string();
    }

    /// Body color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Number of doors.
    pub fn num_doors(&self) -> u32 {
        self.num_doors
    }

    /// Renders the shared display block under the given kind label.
    ///
    /// Subtypes reuse this so the inherited lines carry their own label.
    pub(crate) fn display_with_type(&self, vehicle_type: &str) -> String {
        format!(
            "Vehicle: {}\nType: {}\nFuel: {}\nEngine: {}\nColor: {}\nDoors: {}\nLicense Plate: {}\nOdometer: {:.1} km\nSpeed: {} km/h\nVIN: {}\n",
            self.identity,
            vehicle_type,
            self.identity.fuel_type(),
            self.engine,
            self.color,
            self.num_doors,
            self.license_plate,
            self.motion.odometer(),
            self.motion.speed(),
            self.identity.vin(),
        )
    }
}

impl Vehicle for Car {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn vehicle_type(&self) -> &'static str {
        "Car"
    }

    fn display_info(&self) -> String {
        self.display_with_type(self.vehicle_type())
    }
}

impl Mobile for Car {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}
