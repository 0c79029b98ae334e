//! Motorcycle kind.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::models::{Engine, Motion, VehicleIdentity};
use crate::vehicles::{Mobile, Vehicle};

/// Fixed cruising speed applied by [`Motorcycle::ride`], in km/h.
const RIDE_SPEED: i32 = 60;

/// Outcome of attaching a sidecar.
///
/// Attachment is idempotent: a second attempt reports the existing sidecar
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidecarOutcome {
    /// The sidecar was fitted.
    Attached,
    /// A sidecar was already fitted; nothing changed.
    AlreadyAttached,
}

impl fmt::Display for SidecarOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidecarOutcome::Attached => f.write_str("Sidecar successfully attached."),
            SidecarOutcome::AlreadyAttached => f.write_str("Sidecar already attached."),
        }
    }
}

/// A motorcycle with an optional sidecar and a fixed helmet policy.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Engine;
/// use u_fleet::vehicles::{Mobile, Motorcycle};
///
/// let engine = Engine::new(120, "4-stroke").unwrap();
/// let mut moto = Motorcycle::new("Yamaha", "MT-09", 2023, "petrol", engine).unwrap();
///
/// let summary = moto.ride(100.0).unwrap();
/// assert!(summary.contains("rode 100 km"));
/// assert_eq!(moto.speed(), 60);
/// assert_eq!(moto.odometer(), 100.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Motorcycle {
    identity: VehicleIdentity,
    engine: Engine,
    motion: Motion,
    has_sidecar: bool,
    helmet_required: bool,
}

impl Motorcycle {
    /// Creates a motorcycle without a sidecar.
    ///
    /// Identity fields are validated in the shared fixed order; the first
    /// failing check aborts construction.
    pub fn new(
        brand: &str,
        model: &str,
        year: i32,
        fuel_type: &str,
        engine: Engine,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            identity: VehicleIdentity::new(brand, model, year, fuel_type)?,
            engine,
            motion: Motion::new(),
            has_sidecar: false,
            helmet_required: true,
        })
    }

    /// Fits a sidecar at construction time.
    pub fn with_sidecar(mut self) -> Self {
        self.has_sidecar = true;
        self
    }

    /// Rides `km` kilometres at the fixed cruising speed of 60 km/h.
    ///
    /// Accelerates by 60 km/h, then drives the distance. Fails unless `km`
    /// is finite and strictly positive, leaving speed and odometer
    /// untouched.
    pub fn ride(&mut self, km: f64) -> Result<String, ValidationError> {
        if !km.is_finite() || km <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "distance",
                value: km,
            });
        }
        self.motion.accelerate(RIDE_SPEED)?;
        let total = self.motion.drive(km)?;
        Ok(format!(
            "{} rode {} km. Total: {:.1} km",
            self.identity, km, total
        ))
    }

    /// Attaches a sidecar, reporting an already-fitted one as a no-op.
    pub fn attach_sidecar(&mut self) -> SidecarOutcome {
        if self.has_sidecar {
            return SidecarOutcome::AlreadyAttached;
        }
        self.has_sidecar = true;
        SidecarOutcome::Attached
    }

    /// Whether a sidecar is fitted.
    pub fn has_sidecar(&self) -> bool {
        self.has_sidecar
    }

    /// Reports the helmet policy for this motorcycle.
    pub fn check_helmet(&self) -> String {
        let required = if self.helmet_required { "Yes" } else { "No" };
        format!("Helmet required: {}", required)
    }
}

impl Vehicle for Motorcycle {
    fn identity(&self) -> &VehicleIdentity {
        &self.identity
    }

    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn vehicle_type(&self) -> &'static str {
        "Motorcycle"
    }

    fn display_info(&self) -> String {
        let sidecar = if self.has_sidecar { "Yes" } else { "No" };
        format!(
            "Vehicle: {}\nType: {}\nFuel: {}\nEngine: {}\nSidecar: {}\nOdometer: {:.1} km\nSpeed: {} km/h\nVIN: {}\n",
            self.identity,
            self.vehicle_type(),
            self.identity.fuel_type(),
            self.engine,
            sidecar,
            self.motion.odometer(),
            self.motion.speed(),
            self.identity.vin(),
        )
    }
}

impl Mobile for Motorcycle {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}
