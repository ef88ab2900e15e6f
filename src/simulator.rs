//! Simulation of the car in the parking lot.
//!
//! The car is advanced by exactly one time step per fixed update, using the control input of the
//! current frame. There is no collision with the parking lot's boundary.

use bevy::prelude::*;

use crate::resource::{CarRes, ControlRes};

pub struct Simulator {
    /// Seconds per tick.
    pub time_step: f64,
}

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_seconds(self.time_step))
            .add_systems(FixedUpdate, simulate);
    }
}

fn simulate(input: Res<ControlRes>, mut car: ResMut<CarRes>) {
    let motion = car.advance(&input);

    if motion.saturated {
        warn!(
            "turn angle limited, distance per tick exceeds the turning circle ({})",
            car.report()
        );
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        domain::{SteeringPulse, Velocity},
        tests::car,
    };

    #[test]
    fn test_simulate_advances_car_once_per_run() {
        let mut app = App::new();
        app.insert_resource(CarRes::from(car()))
            .init_resource::<ControlRes>()
            .add_systems(Update, simulate);

        {
            let mut input = app.world.resource_mut::<ControlRes>();
            input.throttle = Velocity::new(10.0);
            input.steering = SteeringPulse::Right;
        }
        app.update();
        app.update();

        let car = app.world.resource::<CarRes>();
        assert_abs_diff_eq!(
            car.wheel_angle().radians(),
            2.0 * car.world().wheel_rate(),
            epsilon = 1e-15
        );
        assert!(car.position().x() > 100.0);
        assert!(car.heading().radians() < 0.0);
    }
}
