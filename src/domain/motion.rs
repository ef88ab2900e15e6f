//! Kinematic motion model.
//!
//! The car follows a bicycle model: with the front wheels turned by `α`, the reference point in
//! the middle of the body travels on a circle whose radius follows from the wheelbase and the
//! offset of the reference point. During one tick the car moves along the chord of that circle
//! whose length is the distance driven in the tick.

use std::f64::consts::FRAC_PI_2;

use super::{Angle, CarGeometry, Controls};

/// Pose change of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    pub dx: f64,
    pub dy: f64,
    pub dheading: f64,
    /// The chord was longer than the turning circle's diameter and the turn angle was limited.
    pub saturated: bool,
}

/// Radius of the circle traced by the car's reference point, `None` for straight motion.
pub fn turning_radius(wheel_angle: Angle, geometry: &CarGeometry) -> Option<f64> {
    let alpha = wheel_angle.abs().radians();
    if alpha == 0.0 {
        return None;
    }

    let tan = alpha.tan();
    let wheelbase = geometry.wheelbase();
    let length = geometry.length();

    Some(
        (wheelbase.powi(2) * (1.0 / (tan * tan) + 1.0 / 4.0)
            + wheelbase * length / tan
            + length.powi(2) / 4.0)
            .sqrt(),
    )
}

/// Pose change for one tick of `time_step` seconds starting at `heading`.
pub fn integrate(
    heading: Angle,
    controls: &Controls,
    geometry: &CarGeometry,
    time_step: f64,
) -> Motion {
    let wheel_angle = controls.wheel_angle().radians();
    let wdir = if wheel_angle > 0.0 {
        1.0
    } else if wheel_angle < 0.0 {
        -1.0
    } else {
        0.0
    };
    let direction = controls.direction().sign();
    let distance = f64::from(controls.speed()) * time_step;

    let (tick_angle, saturated) = match turning_radius(controls.wheel_angle(), geometry) {
        Some(radius) => {
            let half_chord = distance / (2.0 * radius);
            let clamped = half_chord.clamp(-1.0, 1.0);
            (2.0 * clamped.asin(), clamped != half_chord)
        }
        None => (0.0, false),
    };

    let heading = heading.radians();
    let (dx, dy) = if tick_angle != 0.0 {
        let chord_angle = FRAC_PI_2 - (-wdir) * heading - tick_angle / 2.0;
        (
            direction * wdir * distance * chord_angle.cos(),
            direction * distance * chord_angle.sin(),
        )
    } else {
        (
            direction * (-distance * heading.sin()),
            direction * distance * heading.cos(),
        )
    };

    let heading_delta = if wdir > 0.0 {
        -tick_angle
    } else if wdir < 0.0 {
        tick_angle
    } else {
        0.0
    };

    Motion {
        dx,
        dy,
        dheading: direction * heading_delta,
        saturated,
    }
}
