//! Two small object graphs built around trait boundaries.
//!
//! Vehicles are produced by region-specific factories, and a book catalogue is
//! driven by an interactive command session through a manager that only knows
//! the catalogue's trait.

pub mod domain;
pub use domain::{
    Book, Car, Config, EuVehicleFactory, Library, LibraryInterface, LibraryManager, Motorcycle,
    Region, UsVehicleFactory, Vehicle, VehicleFactory,
};

/// The channel all user-facing notices pass through.
pub mod notify;
pub use notify::{Console, Notifier, Transcript};

pub mod session;
pub use session::{Command, Session, State};

/// The fixed factory demonstration.
pub mod showroom;
