//! Movement state shared by every vehicle kind.

use serde::Serialize;

use crate::error::ValidationError;

/// Current speed and cumulative odometer for a single vehicle.
///
/// Embedded by each concrete vehicle kind; the three mutators here are the
/// only operations anywhere in the crate that change speed or odometer.
/// Speed never goes below zero and the odometer never decreases.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Motion;
///
/// let mut m = Motion::new();
/// m.accelerate(40).unwrap();
/// m.drive(60.0).unwrap();
/// assert_eq!(m.speed(), 40);
/// assert_eq!(m.odometer(), 60.0);
///
/// assert_eq!(m.brake(), 40);
/// assert_eq!(m.speed(), 0);
/// assert_eq!(m.odometer(), 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Motion {
    speed: i32,
    odometer: f64,
}

impl Motion {
    /// Creates movement state at rest with an empty odometer.
    pub fn new() -> Self {
        Self {
            speed: 0,
            odometer: 0.0,
        }
    }

    /// Increases speed by `delta` km/h, returning the new speed.
    ///
    /// Fails unless `delta` is strictly positive. No maximum speed is
    /// modeled.
    pub fn accelerate(&mut self, delta: i32) -> Result<i32, ValidationError> {
        if delta <= 0 {
            return Err(ValidationError::NotPositive {
                field: "speed delta",
                value: delta as f64,
            });
        }
        self.speed += delta;
        Ok(self.speed)
    }

    /// Stops the vehicle, returning the speed it had before braking.
    ///
    /// The odometer is untouched.
    pub fn brake(&mut self) -> i32 {
        let prior = self.speed;
        self.speed = 0;
        prior
    }

    /// Adds `distance` km to the odometer, returning the new total.
    ///
    /// Fails unless `distance` is finite and strictly positive.
    pub fn drive(&mut self, distance: f64) -> Result<f64, ValidationError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "distance",
                value: distance,
            });
        }
        self.odometer += distance;
        Ok(self.odometer)
    }

    /// Current speed in km/h.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Cumulative distance driven in km.
    pub fn odometer(&self) -> f64 {
        self.odometer
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}
