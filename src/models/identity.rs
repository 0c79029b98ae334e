//! Vehicle identity and construction-time validation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Earliest model year accepted at construction.
pub const MIN_YEAR: i32 = 1900;

/// Fuel consumed by a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    /// Petrol / gasoline.
    Petrol,
    /// Diesel.
    Diesel,
    /// Battery-electric.
    Electric,
}

impl FuelType {
    /// Labels accepted by [`FromStr`](std::str::FromStr).
    pub const VALID: &'static [&'static str] = &["petrol", "diesel", "electric"];

    /// Canonical label for this fuel type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            _ => Err(ValidationError::InvalidChoice {
                field: "fuel type",
                value: s.to_string(),
                valid: FuelType::VALID,
            }),
        }
    }
}

/// Identity fields shared by every vehicle kind.
///
/// Validated once at construction. The VIN is generated from a random
/// 128-bit identifier and never reassigned; uniqueness is probabilistic,
/// no external registry is consulted.
///
/// # Examples
///
/// ```
/// use u_fleet::models::VehicleIdentity;
///
/// let id = VehicleIdentity::new("Yamaha", "MT-09", 2023, "petrol").unwrap();
/// assert_eq!(id.brand(), "Yamaha");
/// assert_eq!(id.to_string(), "2023 Yamaha MT-09 (petrol)");
///
/// assert!(VehicleIdentity::new("", "MT-09", 2023, "petrol").is_err());
/// assert!(VehicleIdentity::new("Yamaha", "MT-09", 1899, "petrol").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleIdentity {
    brand: String,
    model: String,
    year: i32,
    fuel_type: FuelType,
    vin: Uuid,
}

impl VehicleIdentity {
    /// Validates the shared identity fields and assigns a fresh VIN.
    ///
    /// Checks run in a fixed order: brand non-empty, model non-empty,
    /// year within `[1900, current_year]`, fuel type one of
    /// [`FuelType::VALID`]. The first failing check determines the error.
    pub fn new(
        brand: &str,
        model: &str,
        year: i32,
        fuel_type: &str,
    ) -> Result<Self, ValidationError> {
        if brand.is_empty() {
            return Err(ValidationError::EmptyField { field: "brand" });
        }
        if model.is_empty() {
            return Err(ValidationError::EmptyField { field: "model" });
        }
        let current_year = Utc::now().year();
        if year < MIN_YEAR || year > current_year {
            return Err(ValidationError::OutOfRange {
                field: "year",
                value: year as i64,
                min: MIN_YEAR as i64,
                max: current_year as i64,
            });
        }
        let fuel_type = fuel_type.parse()?;
        Ok(Self {
            brand: brand.to_string(),
            model: model.to_string(),
            year,
            fuel_type,
            vin: Uuid::new_v4(),
        })
    }

    /// Brand name.
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Model year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Fuel type.
    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    /// Vehicle identification number, frozen at construction.
    pub fn vin(&self) -> Uuid {
        self.vin
    }
}

impl fmt::Display for VehicleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.year, self.brand, self.model, self.fuel_type
        )
    }
}
