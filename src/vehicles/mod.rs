//! Concrete vehicle kinds and the capability traits they implement.
//!
//! - [`Vehicle`] — identity, engine access, kind label, display
//! - [`Mobile`] — movement operations over embedded [`Motion`](crate::models::Motion) state
//! - [`Motorcycle`], [`Bus`], [`Car`], [`SportsCar`] — the concrete kinds

mod bus;
mod car;
mod motorcycle;
mod sports_car;
mod vehicle;

pub use bus::{AlightingOutcome, BoardingOutcome, Bus, RepaintOutcome, TuneOutcome};
pub use car::Car;
pub use motorcycle::{Motorcycle, SidecarOutcome};
pub use sports_car::{SpoilerKind, SportsCar, MAX_GEAR, MIN_GEAR};
pub use vehicle::{Mobile, Vehicle};
