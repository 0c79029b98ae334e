//! Vehicle capability traits.

use crate::error::ValidationError;
use crate::models::{Engine, Motion, VehicleIdentity};

/// Common interface implemented by every vehicle kind.
///
/// Each kind owns its identity and engine exclusively and reports a
/// human-readable kind label. Dispatch is resolved statically at the call
/// site; the trait exists as the capability contract, not for plugins.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Engine;
/// use u_fleet::vehicles::{Mobile, Motorcycle, Vehicle};
///
/// let engine = Engine::new(120, "4-stroke").unwrap();
/// let mut moto = Motorcycle::new("Yamaha", "MT-09", 2023, "petrol", engine).unwrap();
/// assert_eq!(moto.vehicle_type(), "Motorcycle");
/// assert!(moto.start_engine().contains("engine started"));
///
/// moto.accelerate(30).unwrap();
/// assert_eq!(moto.speed(), 30);
/// ```
pub trait Vehicle {
    /// Shared identity fields (brand, model, year, fuel, VIN).
    fn identity(&self) -> &VehicleIdentity;

    /// The engine owned by this vehicle.
    fn engine(&self) -> &Engine;

    /// Human-readable kind label.
    fn vehicle_type(&self) -> &'static str;

    /// Describes engine activation.
    fn start_engine(&self) -> String {
        format!(
            "{} engine started. Engine: {}",
            self.identity(),
            self.engine()
        )
    }

    /// Multi-line summary of this vehicle's current state.
    fn display_info(&self) -> String;
}

/// Movement operations delegated to an embedded [`Motion`] value.
///
/// Implementors supply the two accessors; the operations are defined once
/// here and forward to the embedded state, so no kind duplicates mutation
/// logic or can bypass the validated mutators.
pub trait Mobile: Vehicle {
    /// The embedded movement state.
    fn motion(&self) -> &Motion;

    /// Mutable access to the embedded movement state.
    fn motion_mut(&mut self) -> &mut Motion;

    /// Increases speed by `delta` km/h.
    ///
    /// Fails unless `delta` is strictly positive.
    fn accelerate(&mut self, delta: i32) -> Result<(), ValidationError> {
        self.motion_mut().accelerate(delta)?;
        Ok(())
    }

    /// Stops the vehicle. Speed drops to zero; the odometer is untouched.
    fn brake(&mut self) -> String {
        self.motion_mut().brake();
        format!("{} stopped.", self.identity())
    }

    /// Drives `distance` km, accumulating the odometer.
    ///
    /// Fails unless `distance` is finite and strictly positive.
    fn drive(&mut self, distance: f64) -> Result<String, ValidationError> {
        let total = self.motion_mut().drive(distance)?;
        Ok(format!(
            "{} drove {} km. Total: {:.1} km",
            self.identity(),
            distance,
            total
        ))
    }

    /// Current speed in km/h.
    fn speed(&self) -> i32 {
        self.motion().speed()
    }

    /// Cumulative distance driven in km.
    fn odometer(&self) -> f64 {
        self.motion().odometer()
    }
}
