//! 2D visualization.
//!
//! The parking lot and the car are drawn as outlines. World meters are scaled to pixels, the
//! camera is centered on the parking lot. A text overlay shows the state of the car.

use bevy::prelude::*;

use crate::{
    domain::{turning_radius, Car, Direction, Position},
    resource::{CarRes, ParkingLotRes},
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(Update, (draw_parking_lot, draw_car, update_text));
    }
}

#[derive(Component)]
struct StatusText;

const PARKING_LOT_COLOR: Color = Color::GRAY;
const CAR_COLOR: Color = Color::WHITE;

const HELP: &str = "Controls: arrow keys, left shift fine steering, R reverse, space report";

fn to_screen(position: Position, scale: f64) -> Vec2 {
    let (x, y): (f32, f32) = (position * scale).into();
    Vec2::new(x, y)
}

fn closed_outline(corners: [Position; 4], scale: f64) -> impl Iterator<Item = Vec2> {
    corners
        .into_iter()
        .chain(std::iter::once(corners[0]))
        .map(move |p| to_screen(p, scale))
}

fn set_up(mut commands: Commands, car: Res<CarRes>, parking_lot: Res<ParkingLotRes>) {
    let center = to_screen(parking_lot.center(), car.world().scale());

    let mut camera = Camera2dBundle::default();
    camera.transform.translation.x = center.x;
    camera.transform.translation.y = center.y;
    commands.spawn(camera);

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 18.0,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        }),
        StatusText,
    ));

    info!(
        "parking lot {} m x {} m, car starting at ({}, {})",
        parking_lot.width(),
        parking_lot.height(),
        car.position().x(),
        car.position().y()
    );
}

fn draw_parking_lot(mut gizmos: Gizmos, car: Res<CarRes>, parking_lot: Res<ParkingLotRes>) {
    gizmos.linestrip_2d(
        closed_outline(parking_lot.outline(), car.world().scale()),
        PARKING_LOT_COLOR,
    );
}

fn draw_car(mut gizmos: Gizmos, car: Res<CarRes>) {
    gizmos.linestrip_2d(closed_outline(car.outline(), car.world().scale()), CAR_COLOR);
}

fn update_text(car: Res<CarRes>, mut text: Query<&mut Text, With<StatusText>>) {
    for mut text in &mut text {
        text.sections[0].value = status(&car);
    }
}

fn status(car: &Car) -> String {
    let radius = turning_radius(car.wheel_angle(), car.geometry())
        .map(|r| format!("{r:.1} m"))
        .unwrap_or_else(|| "straight".to_string());

    format!(
        "Speed: {:.1} m/s {}\nWheel angle: {:.1}°\n\
         Turning radius: {radius}\nHeading: {:.0}°\n\n{HELP}",
        f64::from(car.speed()),
        match car.direction() {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        },
        car.wheel_angle().radians().to_degrees(),
        car.heading().to_deg(),
    )
}
