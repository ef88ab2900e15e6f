//! Car with front wheel steering, driven by discrete steering pulses and a commanded speed.

use std::fmt;

use thiserror::Error;

use super::{
    motion::{self, Motion},
    world::positive,
    Angle, ConfigError, ControlInput, Controls, Direction, Position, SteeringPulse, Velocity,
    WorldConstants,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Car {
    position: Position,
    heading: Angle,
    controls: Controls,
    geometry: CarGeometry,
    world: WorldConstants,
}

impl Car {
    /// Car standing at `start`, facing along the positive y-axis with straight wheels.
    pub fn new(geometry: CarGeometry, world: WorldConstants, start: Position) -> Self {
        Self {
            position: start,
            heading: Angle::default(),
            controls: Controls::new(&world),
            geometry,
            world,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Counter-clockwise angle between the world's x-axis and the car's lateral axis.
    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn wheel_angle(&self) -> Angle {
        self.controls.wheel_angle()
    }

    pub fn speed(&self) -> Velocity {
        self.controls.speed()
    }

    pub fn direction(&self) -> Direction {
        self.controls.direction()
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn geometry(&self) -> &CarGeometry {
        &self.geometry
    }

    pub fn world(&self) -> &WorldConstants {
        &self.world
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: Angle) {
        self.heading = heading;
    }

    pub fn set_wheel_angle(&mut self, angle: Angle) {
        self.controls.set_wheel_angle(angle);
    }

    pub fn apply_steering_pulse(&mut self, pulse: SteeringPulse) {
        self.controls.apply_steering_pulse(pulse);
    }

    pub fn set_commanded_speed(&mut self, speed: Velocity) {
        self.controls.set_commanded_speed(speed);
    }

    pub fn set_direction(&mut self, reverse: bool) {
        self.controls.set_direction(reverse);
    }

    /// Factor applied to the world's wheel rate on every steering pulse.
    pub fn set_steer_rate(&mut self, steer_rate: f64) -> Result<(), CarError> {
        if !(steer_rate >= 0.0 && steer_rate.is_finite()) {
            return Err(CarError::InvalidSteerRate(steer_rate));
        }
        self.controls.set_steer_rate(steer_rate);
        Ok(())
    }

    pub fn apply_input(&mut self, input: &ControlInput) {
        self.controls.apply_input(input);
    }

    /// Advances the car by one time step.
    pub fn tick(&mut self) -> Motion {
        let motion = motion::integrate(
            self.heading,
            &self.controls,
            &self.geometry,
            self.world.time_step(),
        );

        self.position += Position::new(motion.dx, motion.dy);
        self.heading += Angle::new(motion.dheading);

        motion
    }

    /// Applies the input of one frame and advances the car by one time step.
    pub fn advance(&mut self, input: &ControlInput) -> Motion {
        self.apply_input(input);
        self.tick()
    }

    /// Body corners in world meters: front left, front right, rear right, rear left.
    pub fn outline(&self) -> [Position; 4] {
        let half_width = self.geometry.width() / 2.0;
        let half_length = self.geometry.length() / 2.0;

        [
            Position::new(-half_width, half_length),
            Position::new(half_width, half_length),
            Position::new(half_width, -half_length),
            Position::new(-half_width, -half_length),
        ]
        .map(|offset| self.position + offset.rotate_vector(self.heading))
    }

    pub fn report(&self) -> Report {
        Report {
            wheel_angle: self.wheel_angle(),
            heading: self.heading,
            position: self.position,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarError {
    #[error("steer rate must be finite and non-negative, got {0}")]
    InvalidSteerRate(f64),
}

/// Dimensions of the car in meters.
#[derive(Clone, Debug, PartialEq)]
pub struct CarGeometry {
    wheelbase: f64,
    length: f64,
    width: f64,
}

impl CarGeometry {
    pub fn new(wheelbase: f64, length: f64, width: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            wheelbase: positive("wheelbase", wheelbase)?,
            length: positive("length", length)?,
            width: positive("width", width)?,
        })
    }

    /// Distance between the front and the rear axle.
    pub fn wheelbase(&self) -> f64 {
        self.wheelbase
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Diagnostic snapshot of the car.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub wheel_angle: Angle,
    pub heading: Angle,
    pub position: Position,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wheel angle {:.4} rad, heading {:.4} rad, x {:.3} m, y {:.3} m",
            self.wheel_angle.radians(),
            self.heading.radians(),
            self.position.x(),
            self.position.y()
        )
    }
}
