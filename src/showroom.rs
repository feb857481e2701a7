use tracing::instrument;

use crate::{
    domain::{EuVehicleFactory, UsVehicleFactory, Vehicle, VehicleFactory},
    notify::Notifier,
};

/// Builds one car and one motorcycle from `factory` and starts both.
pub fn exhibit(
    factory: &dyn VehicleFactory,
    car: (&str, &str),
    motorcycle: (&str, &str),
    notifier: &dyn Notifier,
) {
    let car = factory.create_car(car.0, car.1);
    let motorcycle = factory.create_motorcycle(motorcycle.0, motorcycle.1);

    car.start_engine(notifier);
    motorcycle.start_engine(notifier);
}

/// Runs the fixed demonstration: the US line-up, a dashed rule of
/// `rule_width` characters, then the EU line-up.
#[instrument(level = "debug", skip(notifier))]
pub fn run(notifier: &dyn Notifier, rule_width: usize) {
    exhibit(
        &UsVehicleFactory,
        ("Ford", "Mustang"),
        ("Harley-Davidson", "Iron 883"),
        notifier,
    );

    notifier.info(&"-".repeat(rule_width));

    exhibit(
        &EuVehicleFactory,
        ("Volkswagen", "Golf"),
        ("BMW", "R1250GS"),
        notifier,
    );
}
