//! Domain models for vehicles and the book catalogue.
//!
//! This module contains the capability traits (`Vehicle`, `VehicleFactory`,
//! `LibraryInterface`), their concrete variants, and configuration.

/// Vehicles and their engine-start messages.
pub mod vehicle;
pub use vehicle::{Car, Motorcycle, Vehicle};

/// Region-specific vehicle factories.
pub mod factory;
pub use factory::{EuVehicleFactory, Region, UsVehicleFactory, VehicleFactory};

mod book;
pub use book::Book;

/// The catalogue capability and its vector-backed implementation.
pub mod library;
pub use library::{Library, LibraryInterface};

mod manager;
pub use manager::LibraryManager;

/// Runtime configuration.
pub mod config;
pub use config::Config;
