//! World constants shared by all entities and the parking lot the car is maneuvering in.

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;

use super::Position;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be strictly positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("maximum wheel angle must lie in (0, pi/2), got {0}")]
    TurnAngleOutOfRange(f64),
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    // Also rejects NaN.
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

/// Constants of the simulated world. Constructed once and copied into every entity that needs
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConstants {
    scale: f64,
    wheel_rate: f64,
    max_wheel_angle: f64,
    time_step: f64,
}

impl WorldConstants {
    /// * `scale` - pixels per meter
    /// * `wheel_rate` - wheel rotation per steering pulse in radians
    /// * `max_wheel_angle` - steering limit in radians
    /// * `time_step` - seconds per tick
    pub fn new(
        scale: f64,
        wheel_rate: f64,
        max_wheel_angle: f64,
        time_step: f64,
    ) -> Result<Self, ConfigError> {
        if !(max_wheel_angle > 0.0 && max_wheel_angle < FRAC_PI_2) {
            return Err(ConfigError::TurnAngleOutOfRange(max_wheel_angle));
        }

        Ok(Self {
            scale: positive("scale", scale)?,
            wheel_rate: positive("wheel rate", wheel_rate)?,
            max_wheel_angle,
            time_step: positive("time step", time_step)?,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn wheel_rate(&self) -> f64 {
        self.wheel_rate
    }

    pub fn max_wheel_angle(&self) -> f64 {
        self.max_wheel_angle
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }
}

/// Rectangular stage with its bottom left corner in the origin. The car is not confined to it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParkingLot {
    width: f64,
    height: f64,
}

impl ParkingLot {
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            width: positive("parking lot width", width)?,
            height: positive("parking lot height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Corners in counter-clockwise order, starting in the origin.
    pub fn outline(&self) -> [Position; 4] {
        [
            Position::new(0.0, 0.0),
            Position::new(self.width, 0.0),
            Position::new(self.width, self.height),
            Position::new(0.0, self.height),
        ]
    }
}
