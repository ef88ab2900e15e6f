//! Configuration of the simulation, built once at start-up.

use std::f64::consts::PI;

use crate::domain::{
    Car, CarGeometry, ConfigError, ParkingLot, Position, Velocity, WorldConstants,
};

const PARKING_LOT_WIDTH: f64 = 200.0;
const PARKING_LOT_HEIGHT: f64 = 100.0;

/// Pixels per meter.
const SCALE: f64 = 6.0;
/// Twenty pulses turn the wheels from straight to the limit.
const WHEEL_RATE: f64 = PI / 4.0 / 20.0;
const MAX_WHEEL_ANGLE: f64 = PI / 4.0;
/// Rendering rate of the display.
const TIME_STEP: f64 = 1.0 / 60.0;

const START: Position = Position::new(100.0, 50.0);

const WHEELBASE: f64 = 2.39;
const CAR_LENGTH: f64 = 3.02;
const CAR_WIDTH: f64 = 1.72;

const GAS_SPEED: Velocity = Velocity::new(10.0);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub parking_lot: ParkingLot,
    pub world: WorldConstants,
    pub car: CarGeometry,
    pub start: Position,
    /// Speed commanded while the gas pedal is pressed.
    pub gas_speed: Velocity,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            parking_lot: ParkingLot::new(PARKING_LOT_WIDTH, PARKING_LOT_HEIGHT)?,
            world: WorldConstants::new(SCALE, WHEEL_RATE, MAX_WHEEL_ANGLE, TIME_STEP)?,
            car: CarGeometry::new(WHEELBASE, CAR_LENGTH, CAR_WIDTH)?,
            start: START,
            gas_speed: GAS_SPEED,
        })
    }

    pub fn create_car(&self) -> Car {
        Car::new(self.car.clone(), self.world, self.start)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests;

    #[test]
    fn test_config_is_valid() {
        let config = Config::new().unwrap();
        assert_eq!(config.world, tests::world());
        assert_eq!(config.car, tests::geometry());
        assert_eq!(config.create_car(), tests::car());
    }

    #[test]
    fn test_start_lies_in_parking_lot() {
        let config = Config::new().unwrap();
        assert_eq!(config.start, config.parking_lot.center());
    }
}
