//! Engine value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Engine construction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineType {
    /// Two-stroke combustion engine.
    #[serde(rename = "2-stroke")]
    TwoStroke,
    /// Four-stroke combustion engine.
    #[serde(rename = "4-stroke")]
    FourStroke,
    /// Battery-electric motor.
    #[serde(rename = "electric")]
    Electric,
    /// Diesel combustion engine.
    #[serde(rename = "diesel")]
    Diesel,
}

impl EngineType {
    /// Labels accepted by [`FromStr`](std::str::FromStr).
    pub const VALID: &'static [&'static str] = &["2-stroke", "4-stroke", "electric", "diesel"];

    /// Canonical label for this engine type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::TwoStroke => "2-stroke",
            EngineType::FourStroke => "4-stroke",
            EngineType::Electric => "electric",
            EngineType::Diesel => "diesel",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2-stroke" => Ok(EngineType::TwoStroke),
            "4-stroke" => Ok(EngineType::FourStroke),
            "electric" => Ok(EngineType::Electric),
            "diesel" => Ok(EngineType::Diesel),
            _ => Err(ValidationError::InvalidChoice {
                field: "engine type",
                value: s.to_string(),
                valid: EngineType::VALID,
            }),
        }
    }
}

/// An engine with a power rating and construction type.
///
/// Validated at construction; the rating stays strictly positive for the
/// engine's whole lifetime. The only post-construction mutation is
/// [`add_horsepower`](Engine::add_horsepower), reachable solely through an
/// owning vehicle.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Engine;
///
/// let e = Engine::new(120, "4-stroke").unwrap();
/// assert_eq!(e.horsepower(), 120);
/// assert_eq!(e.to_string(), "120 HP 4-stroke engine");
///
/// assert!(Engine::new(0, "4-stroke").is_err());
/// assert!(Engine::new(120, "steam").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engine {
    horsepower: i32,
    engine_type: EngineType,
}

impl Engine {
    /// Creates an engine.
    ///
    /// Fails if `horsepower` is not strictly positive, or if `engine_type`
    /// is not one of [`EngineType::VALID`].
    pub fn new(horsepower: i32, engine_type: &str) -> Result<Self, ValidationError> {
        if horsepower <= 0 {
            return Err(ValidationError::NotPositive {
                field: "horsepower",
                value: horsepower as f64,
            });
        }
        let engine_type = engine_type.parse()?;
        Ok(Self {
            horsepower,
            engine_type,
        })
    }

    /// Power rating in HP.
    pub fn horsepower(&self) -> i32 {
        self.horsepower
    }

    /// Engine construction type.
    pub fn engine_type(&self) -> EngineType {
        self.engine_type
    }

    /// Adds `delta` HP to the rating, returning the new total.
    ///
    /// Returns `None` and leaves the rating unchanged unless `delta` is
    /// strictly positive.
    pub(crate) fn add_horsepower(&mut self, delta: i32) -> Option<i32> {
        if delta <= 0 {
            return None;
        }
        self.horsepower += delta;
        Some(self.horsepower)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HP {} engine", self.horsepower, self.engine_type)
    }
}
