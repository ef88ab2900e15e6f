use bevy::prelude::*;

#[cfg(test)]
mod tests;

mod config;
mod controller;
mod domain;
mod headless;
mod resource;
mod simulator;
mod visualizer;

use config::Config;
use domain::ConfigError;

const DEFAULT_HEADLESS_FRAMES: u64 = 600;

fn main() -> Result<(), ConfigError> {
    let config = Config::new()?;

    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some("--headless") {
        let frames = args
            .next()
            .and_then(|frames| frames.parse().ok())
            .unwrap_or(DEFAULT_HEADLESS_FRAMES);
        headless::Headless { config, frames }.run();
        return Ok(());
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Parking lot".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(resource::CarRes::from(config.create_car()))
        .insert_resource(resource::ParkingLotRes::from(config.parking_lot.clone()))
        .add_plugins(controller::Controller {
            gas_speed: config.gas_speed,
        })
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator {
            time_step: config.world.time_step(),
        })
        .run();

    Ok(())
}
