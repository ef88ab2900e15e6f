//! Basic building blocks.

use std::{
    f64::consts::PI,
    ops::{Add, AddAssign, Mul},
};

use nalgebra::{Rotation2, Vector2};

/// Point or offset in world meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        ((self.x - position.x).powi(2) + (self.y - position.y).powi(2)).sqrt()
    }

    /// Rotates the vector counter-clockwise around the origin.
    pub fn rotate_vector(&self, angle: Angle) -> Position {
        let rotated = Rotation2::new(angle.0) * Vector2::new(self.x, self.y);
        Position::new(rotated.x, rotated.y)
    }
}

impl From<Position> for (f32, f32) {
    fn from(value: Position) -> Self {
        (value.x as f32, value.y as f32)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// Angle in radians. Not normalized, headings accumulate over full turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    /// Degrees in `[0, 360)`.
    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI)).rem_euclid(360.0)
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Speed magnitude in meters per second.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Velocity(f64);

impl Velocity {
    pub const ZERO: Velocity = Velocity(0.0);

    pub const fn new(velocity: f64) -> Self {
        Self(velocity)
    }
}

impl From<Velocity> for f64 {
    fn from(value: Velocity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[rstest]
    #[case::zero(0.0, (1.0, 0.0))]
    #[case::quarter(0.5 * PI, (0.0, 1.0))]
    #[case::half(PI, (-1.0, 0.0))]
    #[case::negative(-0.5 * PI, (0.0, -1.0))]
    fn test_position_rotate_vector(#[case] angle: f64, #[case] expected: (f64, f64)) {
        let rotated = Position::new(1.0, 0.0).rotate_vector(Angle::new(angle));
        assert_abs_diff_eq!(
            rotated,
            Position::new(expected.0, expected.1),
            epsilon = 4.0 * f64::EPSILON
        );
    }

    #[rstest]
    #[case(Angle::new(0.0), 0.0)]
    #[case(Angle::new(0.5 * PI), 90.0)]
    #[case(Angle::new(1.0 * PI), 180.0)]
    #[case(Angle::new(1.5 * PI), 270.0)]
    #[case(Angle::new(2.0 * PI), 0.0)]
    #[case(Angle::new(-0.5 * PI), 270.0)]
    fn test_angle_to_deg(#[case] angle: Angle, #[case] expected: f64) {
        assert_abs_diff_eq!(angle.to_deg(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_position_offset_and_scale() {
        let mut position = Position::new(1.0, 2.0) + Position::new(0.5, -1.0);
        position += Position::new(0.5, 1.0);
        assert_abs_diff_eq!(position, Position::new(2.0, 2.0));
        assert_eq!(<(f32, f32)>::from(position * 6.0), (12.0, 12.0));
    }

    #[test]
    fn test_angle_accumulates_without_wraparound() {
        let mut heading = Angle::new(1.5 * PI);
        heading += Angle::new(PI);
        assert_abs_diff_eq!(heading.radians(), 2.5 * PI, epsilon = 1e-12);
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }

    impl AbsDiffEq for Angle {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.0, &other.0, epsilon)
        }
    }
}
