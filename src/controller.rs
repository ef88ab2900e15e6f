//! Controller steering the car.
//!
//! The car is driven by the keyboard. Arrow up is the gas pedal, arrow down the brake, the left
//! and right arrows turn the wheels as long as they are held, slower while left shift is held. R
//! toggles between forward and reverse, space logs the current state of the car.

use bevy::prelude::*;

use crate::{
    domain::{ControlInput, SteeringPulse, Velocity},
    resource::{CarRes, ControlRes},
};

pub struct Controller {
    pub gas_speed: Velocity,
}

#[derive(Resource)]
struct GasSpeed(Velocity);

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.insert_resource(GasSpeed(self.gas_speed))
            .init_resource::<ControlRes>()
            .add_systems(Update, (control, steer_rate, report));
    }
}

fn control(keys: Res<ButtonInput<KeyCode>>, gas: Res<GasSpeed>, mut input: ResMut<ControlRes>) {
    let reverse = input.reverse ^ keys.just_pressed(KeyCode::KeyR);
    if reverse != input.reverse {
        debug!("direction set to {}", if reverse { "reverse" } else { "forward" });
    }

    **input = control_input(&keys, gas.0, reverse);
}

fn control_input(keys: &ButtonInput<KeyCode>, gas_speed: Velocity, reverse: bool) -> ControlInput {
    ControlInput {
        throttle: if keys.pressed(KeyCode::ArrowUp) {
            gas_speed
        } else {
            Velocity::ZERO
        },
        brake: keys.pressed(KeyCode::ArrowDown),
        steering: SteeringPulse::from_keys(
            keys.pressed(KeyCode::ArrowRight),
            keys.pressed(KeyCode::ArrowLeft),
        ),
        reverse,
    }
}

const FINE_STEER_RATE: f64 = 0.25;

fn steer_rate(keys: Res<ButtonInput<KeyCode>>, mut car: ResMut<CarRes>) {
    let steer_rate = if keys.pressed(KeyCode::ShiftLeft) {
        FINE_STEER_RATE
    } else {
        1.0
    };

    if car.controls().steer_rate() != steer_rate {
        if let Err(error) = car.set_steer_rate(steer_rate) {
            error!("{error}");
        }
    }
}

fn report(keys: Res<ButtonInput<KeyCode>>, car: Res<CarRes>) {
    if keys.just_pressed(KeyCode::Space) {
        info!("{}", car.report());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const GAS: Velocity = Velocity::new(10.0);

    fn keys(pressed: &[KeyCode]) -> ButtonInput<KeyCode> {
        let mut keys = ButtonInput::default();
        for key in pressed {
            keys.press(*key);
        }
        keys
    }

    #[test]
    fn test_no_keys() {
        assert_eq!(control_input(&keys(&[]), GAS, false), ControlInput::default());
    }

    #[rstest]
    #[case::gas(&[KeyCode::ArrowUp], GAS, false)]
    #[case::brake(&[KeyCode::ArrowDown], Velocity::ZERO, true)]
    #[case::gas_and_brake(&[KeyCode::ArrowUp, KeyCode::ArrowDown], GAS, true)]
    fn test_pedals(#[case] pressed: &[KeyCode], #[case] throttle: Velocity, #[case] brake: bool) {
        let input = control_input(&keys(pressed), GAS, false);
        assert_eq!(input.throttle, throttle);
        assert_eq!(input.brake, brake);
    }

    #[rstest]
    #[case::right(&[KeyCode::ArrowRight], SteeringPulse::Right)]
    #[case::left(&[KeyCode::ArrowLeft], SteeringPulse::Left)]
    #[case::both(&[KeyCode::ArrowLeft, KeyCode::ArrowRight], SteeringPulse::None)]
    fn test_steering(#[case] pressed: &[KeyCode], #[case] steering: SteeringPulse) {
        assert_eq!(control_input(&keys(pressed), GAS, false).steering, steering);
    }

    #[test]
    fn test_reverse_toggles_on_key_press() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(GasSpeed(GAS))
            .init_resource::<ControlRes>()
            .add_systems(Update, control);

        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.update();
        assert!(app.world.resource::<ControlRes>().reverse);

        // Holding the key keeps the direction.
        app.world.resource_mut::<ButtonInput<KeyCode>>().clear();
        app.update();
        assert!(app.world.resource::<ControlRes>().reverse);

        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::KeyR);
        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.update();
        assert!(!app.world.resource::<ControlRes>().reverse);
    }

    #[test]
    fn test_shift_selects_fine_steering() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(CarRes::from(crate::tests::car()))
            .add_systems(Update, steer_rate);

        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ShiftLeft);
        app.update();
        assert_eq!(
            app.world.resource::<CarRes>().controls().steer_rate(),
            FINE_STEER_RATE
        );

        app.world
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(KeyCode::ShiftLeft);
        app.update();
        assert_eq!(app.world.resource::<CarRes>().controls().steer_rate(), 1.0);
    }
}
