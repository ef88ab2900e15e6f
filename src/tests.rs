//! Test utils.

use std::f64::consts::PI;

use crate::domain::{Car, CarGeometry, Position, WorldConstants};

pub fn world() -> WorldConstants {
    WorldConstants::new(6.0, PI / 4.0 / 20.0, PI / 4.0, 1.0 / 60.0).unwrap()
}

pub fn geometry() -> CarGeometry {
    CarGeometry::new(2.39, 3.02, 1.72).unwrap()
}

/// Car at rest at `(100, 50)`.
pub fn car() -> Car {
    Car::new(geometry(), world(), Position::new(100.0, 50.0))
}
