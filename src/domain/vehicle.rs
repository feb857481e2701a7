use crate::notify::Notifier;

/// Something with an engine that can be started.
///
/// Vehicles are only built by a [`VehicleFactory`](crate::VehicleFactory),
/// which fixes the regional `spec` they carry. They are immutable once built.
pub trait Vehicle {
    /// The manufacturer, e.g. `Ford`.
    fn make(&self) -> &str;

    /// The model name, e.g. `Mustang`.
    fn model(&self) -> &str;

    /// The regional specification the vehicle was built to, e.g. `US Spec`.
    fn spec(&self) -> &str;

    /// The status reported once the engine is running.
    fn started(&self) -> &'static str;

    /// The full engine-start message: `{make} {model} ({spec}): {status}`.
    fn ignition(&self) -> String {
        format!(
            "{} {} ({}): {}",
            self.make(),
            self.model(),
            self.spec(),
            self.started()
        )
    }

    /// Start the engine, reporting the ignition message.
    fn start_engine(&self, notifier: &dyn Notifier) {
        notifier.info(&self.ignition());
    }
}

/// The identifying details shared by every vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Badge {
    make: String,
    model: String,
    spec: String,
}

impl Badge {
    fn new(make: &str, model: &str, spec: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            spec: spec.to_string(),
        }
    }
}

/// A four-wheeled vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    badge: Badge,
}

impl Car {
    pub(crate) fn new(make: &str, model: &str, spec: &str) -> Self {
        Self {
            badge: Badge::new(make, model, spec),
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.badge.make
    }

    fn model(&self) -> &str {
        &self.badge.model
    }

    fn spec(&self) -> &str {
        &self.badge.spec
    }

    fn started(&self) -> &'static str {
        "Engine started"
    }
}

/// A two-wheeled vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    badge: Badge,
}

impl Motorcycle {
    pub(crate) fn new(make: &str, model: &str, spec: &str) -> Self {
        Self {
            badge: Badge::new(make, model, spec),
        }
    }
}

impl Vehicle for Motorcycle {
    fn make(&self) -> &str {
        &self.badge.make
    }

    fn model(&self) -> &str {
        &self.badge.model
    }

    fn spec(&self) -> &str {
        &self.badge.spec
    }

    fn started(&self) -> &'static str {
        "Motor started"
    }
}
