//! Steering and throttle state of the car and the rules for changing it.

use super::{Angle, Velocity, WorldConstants};

/// Steering pulse requested for one frame.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SteeringPulse {
    Right,
    Left,
    #[default]
    None,
}

impl SteeringPulse {
    /// Pulse for the currently held steering keys. Both keys cancel each other out.
    pub fn from_keys(right: bool, left: bool) -> Self {
        match (right, left) {
            (true, false) => SteeringPulse::Right,
            (false, true) => SteeringPulse::Left,
            _ => SteeringPulse::None,
        }
    }

    fn sign(self) -> f64 {
        match self {
            SteeringPulse::Right => 1.0,
            SteeringPulse::Left => -1.0,
            SteeringPulse::None => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }

    /// Factor applied to every displacement.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

/// Snapshot of the driver's input for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlInput {
    /// Speed commanded by the gas pedal, zero if released.
    pub throttle: Velocity,
    pub brake: bool,
    pub steering: SteeringPulse,
    pub reverse: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Controls {
    wheel_angle: Angle,
    speed: Velocity,
    direction: Direction,
    steer_rate: f64,
    wheel_rate: f64,
    max_wheel_angle: f64,
}

impl Controls {
    pub fn new(world: &WorldConstants) -> Self {
        Self {
            wheel_angle: Angle::default(),
            speed: Velocity::ZERO,
            direction: Direction::Forward,
            steer_rate: 1.0,
            wheel_rate: world.wheel_rate(),
            max_wheel_angle: world.max_wheel_angle(),
        }
    }

    /// Positive angles steer to the right.
    pub fn wheel_angle(&self) -> Angle {
        self.wheel_angle
    }

    pub fn speed(&self) -> Velocity {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steer_rate(&self) -> f64 {
        self.steer_rate
    }

    /// Turns the wheels by one pulse. A pulse pushing further into a reached limit is ignored,
    /// a pulse away from it is always applied. The wheels never end up beyond the limit.
    pub fn apply_steering_pulse(&mut self, pulse: SteeringPulse) {
        let sign = pulse.sign();
        if sign == 0.0 {
            return;
        }

        let max = self.max_wheel_angle;
        let angle = self.wheel_angle.radians();
        if (angle >= max && sign > 0.0) || (angle <= -max && sign < 0.0) {
            return;
        }

        let angle = (angle + sign * self.steer_rate * self.wheel_rate).clamp(-max, max);
        self.wheel_angle = Angle::new(angle);

        debug_assert!(self.wheel_angle.radians().abs() <= max);
    }

    /// Sets the speed immediately, there is no acceleration.
    pub fn set_commanded_speed(&mut self, speed: Velocity) {
        debug_assert!(f64::from(speed) >= 0.0, "negative speed {speed:?}");
        self.speed = Velocity::new(f64::from(speed).max(0.0));
    }

    pub fn set_direction(&mut self, reverse: bool) {
        self.direction = Direction::from_reverse(reverse);
    }

    /// Caller has to validate `steer_rate`.
    pub(super) fn set_steer_rate(&mut self, steer_rate: f64) {
        self.steer_rate = steer_rate;
    }

    /// Sets the wheel angle directly, limited to the maximum wheel angle.
    pub fn set_wheel_angle(&mut self, angle: Angle) {
        let max = self.max_wheel_angle;
        self.wheel_angle = Angle::new(angle.radians().clamp(-max, max));
    }

    /// Applies the input of one frame. The brake overrides the gas pedal.
    pub fn apply_input(&mut self, input: &ControlInput) {
        self.apply_steering_pulse(input.steering);
        self.set_commanded_speed(if input.brake {
            Velocity::ZERO
        } else {
            input.throttle
        });
        self.set_direction(input.reverse);
    }
}
