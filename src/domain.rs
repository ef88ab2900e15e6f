//! The domain module encapsulates the core logic of the simulation. It defines the `Car` entity,
//! its steering and throttle controls, the kinematic motion model and the world it moves in.
//!
//! The module has no dependency on the game engine, so the motion model can be driven
//! tick-by-tick without any window, e.g. by the `Driver`.

mod basis;
mod car;
mod controls;
mod driver;
mod motion;
mod world;

pub use basis::{Angle, Position, Velocity};
pub use car::{Car, CarGeometry};
pub use controls::{ControlInput, Controls, Direction, SteeringPulse};
pub use driver::{Driver, InputSource, Renderer};
pub use motion::{turning_radius, Motion};
pub use world::{ConfigError, ParkingLot, WorldConstants};
