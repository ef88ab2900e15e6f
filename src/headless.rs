//! Simulation without a window.
//!
//! An autopilot drives the car through a fixed maneuver for a given number of frames. The frames
//! are paced by the schedule runner at the simulation's time step and the car's state is logged
//! once per simulated second.

use std::time::Duration;

use bevy::{
    app::{AppExit, ScheduleRunnerPlugin},
    log::LogPlugin,
    prelude::*,
};

use crate::{
    config::Config,
    domain::{Car, ControlInput, Driver, InputSource, Renderer, SteeringPulse, Velocity},
};

pub struct Headless {
    pub config: Config,
    pub frames: u64,
}

impl Headless {
    pub fn run(self) {
        let time_step = Duration::from_secs_f64(self.config.world.time_step());

        App::new()
            .add_plugins((
                MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(time_step)),
                LogPlugin::default(),
            ))
            .add_plugins(self)
            .run();
    }
}

impl Plugin for Headless {
    fn build(&self, app: &mut App) {
        let frames_per_second = (1.0 / self.config.world.time_step()).round().max(1.0) as u64;

        app.insert_resource(DriverRes {
            driver: Driver::new(
                self.config.create_car(),
                Autopilot::new(self.config.gas_speed),
                TraceLog::new(frames_per_second),
            ),
            frames: self.frames,
        })
        .add_systems(Update, drive);
    }
}

#[derive(Resource)]
struct DriverRes {
    driver: Driver<Autopilot, TraceLog>,
    frames: u64,
}

fn drive(mut res: ResMut<DriverRes>, mut exit: EventWriter<AppExit>) {
    if res.driver.frames() >= res.frames {
        info!("finished after {} frames: {}", res.frames, res.driver.car().report());
        exit.send(AppExit);
        return;
    }

    let motion = res.driver.step();
    if motion.saturated {
        warn!("turn angle limited at frame {}", res.driver.frames());
    }
}

/// Drives forward while turning right, then left, then straight, repeating every cycle.
struct Autopilot {
    gas_speed: Velocity,
    frame: u64,
}

impl Autopilot {
    const CYCLE: u64 = 720;

    fn new(gas_speed: Velocity) -> Self {
        Self { gas_speed, frame: 0 }
    }

    fn steering(frame: u64) -> SteeringPulse {
        match frame % Self::CYCLE {
            0..=19 => SteeringPulse::Right,
            240..=279 => SteeringPulse::Left,
            480..=499 => SteeringPulse::Right,
            _ => SteeringPulse::None,
        }
    }
}

impl InputSource for Autopilot {
    fn collect_input(&mut self) -> ControlInput {
        let input = ControlInput {
            throttle: self.gas_speed,
            steering: Self::steering(self.frame),
            ..Default::default()
        };
        self.frame += 1;
        input
    }
}

struct TraceLog {
    frames_per_second: u64,
    frame: u64,
}

impl TraceLog {
    fn new(frames_per_second: u64) -> Self {
        Self {
            frames_per_second,
            frame: 0,
        }
    }
}

impl Renderer for TraceLog {
    fn render(&mut self, car: &Car) {
        self.frame += 1;
        if self.frame % self.frames_per_second == 0 {
            info!("{} s: {}", self.frame / self.frames_per_second, car.report());
        } else {
            trace!("{}", car.report());
        }
    }
}
