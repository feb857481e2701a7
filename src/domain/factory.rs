use std::fmt;

use tracing::debug;

use super::vehicle::{Car, Motorcycle};

/// The market a vehicle is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// United States.
    Us,
    /// European Union.
    Eu,
}

impl Region {
    /// The specification string stamped on every vehicle built for this
    /// region.
    #[must_use]
    pub const fn spec(self) -> &'static str {
        match self {
            Self::Us => "US Spec",
            Self::Eu => "EU Spec",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec())
    }
}

/// Builds cars and motorcycles for a single region.
///
/// Construction cannot fail. Make and model are taken as given, including
/// empty strings.
pub trait VehicleFactory {
    /// The region this factory builds for.
    fn region(&self) -> Region;

    /// Build a car.
    fn create_car(&self, make: &str, model: &str) -> Car;

    /// Build a motorcycle.
    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle;
}

/// Builds vehicles to the US specification.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsVehicleFactory;

impl VehicleFactory for UsVehicleFactory {
    fn region(&self) -> Region {
        Region::Us
    }

    fn create_car(&self, make: &str, model: &str) -> Car {
        debug!(make, model, region = %Region::Us, "building car");
        Car::new(make, model, Region::Us.spec())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        debug!(make, model, region = %Region::Us, "building motorcycle");
        Motorcycle::new(make, model, Region::Us.spec())
    }
}

/// Builds vehicles to the EU specification.
#[derive(Debug, Default, Clone, Copy)]
pub struct EuVehicleFactory;

impl VehicleFactory for EuVehicleFactory {
    fn region(&self) -> Region {
        Region::Eu
    }

    fn create_car(&self, make: &str, model: &str) -> Car {
        debug!(make, model, region = %Region::Eu, "building car");
        Car::new(make, model, Region::Eu.spec())
    }

    fn create_motorcycle(&self, make: &str, model: &str) -> Motorcycle {
        debug!(make, model, region = %Region::Eu, "building motorcycle");
        Motorcycle::new(make, model, Region::Eu.spec())
    }
}
