//! Sports car kind, a specialization of [`Car`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{Engine, Motion, VehicleIdentity};
use crate::vehicles::{Car, Mobile, Vehicle};

/// Lowest selectable gear.
pub const MIN_GEAR: i32 = 1;
/// Highest selectable gear.
pub const MAX_GEAR: i32 = 6;

/// Spoiler fitted to a sports car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpoilerKind {
    /// Small lip spoiler.
    Lip,
    /// Fixed wing.
    Wing,
    /// Actively adjusting spoiler.
    Active,
}

impl SpoilerKind {
    /// Labels accepted by [`FromStr`](std::str::FromStr).
    pub const VALID: &'static [&'static str] = &["lip", "wing", "active"];

    /// Canonical label for this spoiler kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpoilerKind::Lip => "lip",
            SpoilerKind::Wing => "wing",
            SpoilerKind::Active => "active",
        }
    }
}

impl fmt::Display for SpoilerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpoilerKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lip" => Ok(SpoilerKind::Lip),
            "wing" => Ok(SpoilerKind::Wing),
            "active" => Ok(SpoilerKind::Active),
            _ => Err(ValidationError::InvalidChoice {
                field: "spoiler",
                value: s.to_string(),
                valid: SpoilerKind::VALID,
            }),
        }
    }
}

/// A sports car: everything a [`Car`] is, plus turbo, gears, and a spoiler.
///
/// Starts in first gear with turbo off and no spoiler. Gear shifts and
/// spoiler changes emit notifications through the [`log`] facade; the
/// caller decides where (and whether) they are rendered.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Engine;
/// use u_fleet::vehicles::{SportsCar, Vehicle};
///
/// let engine = Engine::new(320, "4-stroke").unwrap();
/// let mut sc =
///     SportsCar::new("Ferrari", "488 GTB", 2020, "petrol", engine, "Red", 2, "SPD-488").unwrap();
/// assert_eq!(sc.vehicle_type(), "Sports Car");
///
/// sc.shift_gear(3).unwrap();
/// assert_eq!(sc.gear(), 3);
/// assert!(sc.shift_gear(7).is_err());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SportsCar {
    car: Car,
    turbo_enabled: bool,
    gear: i32,
    spoiler: Option<SpoilerKind>,
}

impl SportsCar {
    /// Creates a sports car in first gear, turbo off, no spoiler.
    ///
    /// Construction goes through [`Car::new`], which performs all
    /// validation and the single production-counter increment.
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
        Ok(Self {
            car: Car::new(
                brand,
                model,
                year,
                fuel_type,
                engine,
                color,
                num_doors,
                license_plate,
            )?,
            turbo_enabled: false,
            gear: MIN_GEAR,
            spoiler: None,
        })
    }

    /// Switches the turbo on.
    pub fn enable_turbo(&mut self) {
        self.turbo_enabled = true;
        log::info!("turbo mode activated");
    }

    /// Switches the turbo off.
    pub fn disable_turbo(&mut self) {
        self.turbo_enabled = false;
        log::info!("turbo mode deactivated");
    }

    /// Whether the turbo is on.
    pub fn turbo_enabled(&self) -> bool {
        self.turbo_enabled
    }

    /// Shifts to `gear`.
    ///
    /// Fails unless the gear is within `[1, 6]`, leaving the current gear
    /// unchanged.
    pub fn shift_gear(&mut self, gear: i32) -> Result<(), ValidationError> {
        if !(MIN_GEAR..=MAX_GEAR).contains(&gear) {
            return Err(ValidationError::OutOfRange {
                field: "gear",
                value: gear as i64,
                min: MIN_GEAR as i64,
                max: MAX_GEAR as i64,
            });
        }
        self.gear = gear;
        log::info!("gear shifted to {}", gear);
        Ok(())
    }

    /// Currently selected gear.
    pub fn gear(&self) -> i32 {
        self.gear
    }

    /// Fits a spoiler of the given kind.
    ///
    /// Fails unless `kind` is one of [`SpoilerKind::VALID`], leaving any
    /// fitted spoiler in place.
    pub fn set_spoiler(&mut self, kind: &str) -> Result<(), ValidationError> {
        let kind: SpoilerKind = kind.parse()?;
        self.spoiler = Some(kind);
        log::info!("spoiler set to {}", kind);
        Ok(())
    }

    /// The fitted spoiler, if any.
    pub fn spoiler(&self) -> Option<SpoilerKind> {
        self.spoiler
    }

    /// Current license plate.
    pub fn license_plate(&self) -> &str {
        self.car.license_plate()
    }

    /// Replaces the license plate. No format validation is applied.
    pub fn set_license_plate(&mut self, plate: &str) {
        self.car.set_license_plate(plate);
    }

    /// Body color.
    pub fn color(&self) -> &str {
        self.car.color()
    }

    /// Number of doors.
    pub fn num_doors(&self) -> u32 {
        self.car.num_doors()
    }
}

impl Vehicle for SportsCar {
    fn identity(&self) -> &VehicleIdentity {
        self.car.identity()
    }

    fn engine(&self) -> &Engine {
        self.car.engine()
    }

    fn vehicle_type(&self) -> &'static str {
        "Sports Car"
    }

    fn display_info(&self) -> String {
        let base = self.car.display_with_type(self.vehicle_type());
        let turbo = if self.turbo_enabled {
            "Enabled"
        } else {
            "Disabled"
        };
        let spoiler = self.spoiler.map(|s| s.as_str()).unwrap_or("None");
        format!(
            "{}Turbo: {}\nGear: {}\nSpoiler: {}\n",
            base, turbo, self.gear, spoiler
        )
    }
}

impl Mobile for SportsCar {
    fn motion(&self) -> &Motion {
        self.car.motion()
    }

    fn motion_mut(&mut self) -> &mut Motion {
        self.car.motion_mut()
    }
}
